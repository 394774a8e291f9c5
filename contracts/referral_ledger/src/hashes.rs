//! Correlation strings written into transaction hashes.
//!
//! * Bonus payouts: `LEVEL{level}-{investment_id}` (level is 1-based).
//! * Investment requests without a caller reference: `INV{timestamp}`.

use soroban_sdk::{Env, String};

/// "LEVEL" + 10 digits + "-" + 20 digits.
const MAX_HASH_LEN: usize = 36;

struct HashBuf {
    bytes: [u8; MAX_HASH_LEN],
    len: usize,
}

impl HashBuf {
    fn new() -> Self {
        Self {
            bytes: [0; MAX_HASH_LEN],
            len: 0,
        }
    }

    fn push_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.bytes[self.len] = b;
            self.len += 1;
        }
    }

    fn push_u64(&mut self, mut n: u64) {
        let mut digits = [0u8; 20];
        let mut count = 0;
        loop {
            digits[count] = b'0' + (n % 10) as u8;
            count += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        while count > 0 {
            count -= 1;
            self.bytes[self.len] = digits[count];
            self.len += 1;
        }
    }

    fn finish(&self, e: &Env) -> String {
        String::from_bytes(e, &self.bytes[..self.len])
    }
}

pub fn bonus_hash(e: &Env, level: u32, investment_id: u64) -> String {
    let mut buf = HashBuf::new();
    buf.push_str("LEVEL");
    buf.push_u64(level as u64);
    buf.push_str("-");
    buf.push_u64(investment_id);
    buf.finish(e)
}

pub fn fallback_transaction_id(e: &Env, timestamp: u64) -> String {
    let mut buf = HashBuf::new();
    buf.push_str("INV");
    buf.push_u64(timestamp);
    buf.finish(e)
}
