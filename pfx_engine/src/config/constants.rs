pub mod compile_time {
    pub mod lexical {
        /// Maximum expression text length (64KB)
        /// SECURITY: Prevents DoS attacks via enormous expression strings
        pub const MAX_EXPRESSION_LENGTH: usize = 64 * 1024;

        /// Maximum number of clauses in a single expression
        /// SECURITY: Prevents DoS via clause explosion attacks
        pub const MAX_CLAUSE_COUNT: usize = 1_000;
    }

    pub mod syntax {
        /// Maximum operand identifier length (255 characters)
        /// SECURITY: Prevents parser complexity attacks
        pub const MAX_OPERAND_LENGTH: usize = 255;

        /// Maximum number of literal elements in a value set
        /// SECURITY: Prevents memory exhaustion via huge IN-lists
        pub const MAX_SET_ELEMENTS: usize = 10_000;
    }
}
