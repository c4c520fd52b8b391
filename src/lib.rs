//! Arbitrary-width unsigned integer arithmetic over big-endian byte
//! strings.
//!
//! Operands are plain byte slices read as base-256 big-endian
//! integers; leading zero bytes never change a value, and outputs are
//! correct as values without being trimmed to minimal length. On top
//! of a 64-byte-limb schoolbook core the crate provides Karatsuba
//! multiplication, Knuth Algorithm D division in base 2^256, and
//! Barrett modular reduction/exponentiation for RSA-sized workloads.
//!
//! Every operation is a pure function: inputs are borrowed, outputs
//! freshly allocated, and nothing is shared between calls. Domain
//! violations (zero divisors, inadmissible Barrett moduli) panic; see
//! each operation's preconditions.
//!
//! ```
//! let m = [0x0b];                                       // 11
//! let mu = bigbytes::barrett_reducer_factor(&m);
//! let pow = bigbytes::modexp_barrett_reduce(&[0x02], &[0x0a], &m, &mu);
//! assert!(bigbytes::equal(&pow, &[0x01]));              // 2^10 ≡ 1 (mod 11)
//! ```

mod arith;
mod barrett;
mod bytes;
mod digits;
mod div;
mod limb;
mod mul;

#[cfg(test)]
mod tests;

pub use arith::{add, equal, greater_than, less_than, subtract};
pub use barrett::{barrett_reducer_factor, mod_barrett_reduce, modexp_barrett_reduce};
pub use div::divide;
pub use mul::multiply;
