use opsmith_core::Complexity;

/// What a complexity tier asks the assembler to emit. Pure data; all
/// rendering lives in the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directives {
    /// Emit a vars block with one port/root pair per config target.
    pub variables: bool,
    /// Fail the play on the first failed task.
    pub error_handling: bool,
    /// Register a `Restart <target>` notify relation on config tasks.
    pub notify_handlers: bool,
    /// Emit the handlers block itself.
    pub handlers: bool,
    /// Emit environment-preparation pre_tasks.
    pub pre_tasks: bool,
    /// Emit explicit per-task state directives (ownership, enabled defaults).
    pub deep_state: bool,
}

/// Map a complexity tier to its directive bundle.
pub fn directives(complexity: Complexity) -> Directives {
    Directives {
        variables: complexity >= Complexity::Intermediate,
        error_handling: complexity >= Complexity::Intermediate,
        notify_handlers: complexity >= Complexity::Intermediate,
        handlers: complexity == Complexity::Advanced,
        pre_tasks: complexity == Complexity::Advanced,
        deep_state: complexity == Complexity::Advanced,
    }
}
