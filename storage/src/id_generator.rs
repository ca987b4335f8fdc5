//! Product id generation.
//!
//! `TimestampIdGenerator` yields `prod_<unix millis>_<9 base36 chars>`. The
//! repository only relies on [`IdGenerator`], so any collision-resistant
//! string source can be plugged in.

use chrono::Utc;
use uuid::Uuid;

pub const ID_PREFIX: &str = "prod";

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh product ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdGenerator;

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self
    }

    fn random_suffix() -> String {
        let mut n = Uuid::new_v4().as_u128();
        let mut out = [b'0'; SUFFIX_LEN];
        for slot in out.iter_mut().rev() {
            *slot = BASE36[(n % 36) as usize];
            n /= 36;
        }
        out.iter().map(|&b| b as char).collect()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        format!(
            "{}_{}_{}",
            ID_PREFIX,
            Utc::now().timestamp_millis(),
            Self::random_suffix()
        )
    }
}
