use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_GEN_ATTEMPTS: usize = 3;
pub const DEFAULT_MIN_SHORT_CODE_LEN: usize = 5;

/// Tunables of a [`LinkService`](crate::LinkService).
///
/// A zero value means "unset" and falls back to the default when the
/// service is constructed.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ServiceConfig {
    /// How many candidate codes `create_short_link` tries before giving up.
    #[builder(default = DEFAULT_MAX_GEN_ATTEMPTS)]
    pub max_gen_attempts: usize,
    /// Codes shorter than this are never stored or looked up.
    #[builder(default = DEFAULT_MIN_SHORT_CODE_LEN)]
    pub min_short_code_len: usize,
}

impl ServiceConfig {
    /// Replaces unset (zero) values with their defaults.
    pub fn normalized(self) -> Self {
        fn or_default(value: usize, default: usize) -> usize {
            if value == 0 {
                default
            } else {
                value
            }
        }

        Self {
            max_gen_attempts: or_default(self.max_gen_attempts, DEFAULT_MAX_GEN_ATTEMPTS),
            min_short_code_len: or_default(self.min_short_code_len, DEFAULT_MIN_SHORT_CODE_LEN),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
