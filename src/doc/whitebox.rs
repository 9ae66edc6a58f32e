//! White-box cryptography tries to keep a cipher secure even when the
//! attacker can see every byte of memory and step through every instruction
//! the program executes — the [gray-box](crate::doc::encryption) threat
//! model of a black-box cipher's implementation running on the attacker's
//! own machine.
//!
//! An ordinary [`Aes128`](crate::Aes128) stores its round keys and uses them
//! directly: anyone who can read process memory during encryption recovers
//! the key. A white-box cipher instead bakes the key into a set of lookup
//! tables at generation time, so that at runtime only table lookups and
//! XORs occur and the key itself never exists as a value in memory.
//!
//! # Construction
//!
//! This crate follows Chow, Eisen, Johnson and Van Oorschot's T-box/Tyi-table
//! construction, hardened with the mixing-bijection and redundant-computation
//! refinements Muir later proposed against the Billet-Gilbert-Ech-Chouk and
//! fault-injection attacks on the original scheme.
//!
//! Each AES round's SubBytes, AddRoundKey and MixColumns steps are folded
//! into one 256-entry table per byte position (a *Tyi table*, 32 bits wide
//! to carry the MixColumns coefficients). The sixteen Tyi outputs of a round
//! are recombined into the next round's state with a cascade of nibble-wise
//! XOR tables, since XOR itself has no closed table form at byte width
//! without exploding table size.
//!
//! Every table boundary is wrapped in a random, invertible 4-bit
//! [`NibbleEncoding`](crate::RandomPermutation) so that the raw intermediate
//! values the tables carry are never visible even to an attacker who dumps
//! every table. When mixing bijections are enabled, a further randomly
//! generated linear map over GF(2) is applied to each round's 32-bit Tyi
//! output before it is encoded, adding diffusion an attacker would otherwise
//! exploit to isolate a single byte's worth of state from the rest.
//!
//! # What this does not defend against
//!
//! A white-box implementation only raises the cost of key extraction; it
//! does not make extraction impossible. Differential computation analysis
//! and other side-channel techniques that treat the table lookups themselves
//! as an oracle can still recover key material from a sufficiently
//! instrumented white-box AES. This construction is a stronger obfuscation,
//! not a different security model.
