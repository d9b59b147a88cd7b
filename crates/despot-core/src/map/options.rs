/// Per-call flags controlling how attributes are mapped.
///
/// Foreign-key resolution is opt-in: it activates for construction-time and
/// bulk-replace calls, or when explicitly requested via `use_foreign_keys`.
/// The mapper never mutates an options value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Explicitly request foreign-key resolution for this call.
    pub use_foreign_keys: bool,

    /// Construction-time call.
    pub initialize: bool,

    /// Bulk-replace call.
    pub reset: bool,

    /// Deletion call. Callers bypass the mapper entirely when this is set;
    /// filtering has no meaning for removal.
    pub unset: bool,
}

impl MapOptions {
    /// Options for a construction-time call.
    pub const INITIALIZE: Self = Self {
        initialize: true,
        use_foreign_keys: false,
        reset: false,
        unset: false,
    };

    /// Options for a bulk-replace call.
    pub const RESET: Self = Self {
        reset: true,
        use_foreign_keys: false,
        initialize: false,
        unset: false,
    };

    /// Options for a deletion call.
    pub const UNSET: Self = Self {
        unset: true,
        use_foreign_keys: false,
        initialize: false,
        reset: false,
    };

    pub const fn new() -> Self {
        Self {
            use_foreign_keys: false,
            initialize: false,
            reset: false,
            unset: false,
        }
    }

    pub const fn with_foreign_keys(mut self) -> Self {
        self.use_foreign_keys = true;
        self
    }

    /// True when foreign-key substitution may run for this call.
    pub const fn foreign_keys_active(&self) -> bool {
        self.use_foreign_keys || self.initialize || self.reset
    }
}
