use core::fmt;

use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use crate::errors::OrbLottoErrorCode;

/// Normalized length: 2 digits, 1 letter, space, 5 digits.
pub const TICKET_NUMBER_LEN: usize = 9;

/// Byte offset of the 5-digit serial inside the normalized form.
const SERIAL_OFFSET: usize = 4;

/// A validated ticket number such as `15G 12902`.
///
/// The inner bytes are always the normalized ASCII form (uppercase letter,
/// single separating space, zero-padded digits), so equality is plain byte
/// equality and the value can be stored in accounts as-is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TicketNumber([u8; TICKET_NUMBER_LEN]);

impl TicketNumber {
    /// Parses an externally supplied string against the wire grammar
    /// `^\d{2}[A-Z] \d{5}$`. A lowercase letter is accepted and normalized;
    /// anything else is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.as_bytes();
        if raw.len() != TICKET_NUMBER_LEN {
            return err!(OrbLottoErrorCode::InvalidTicketFormat);
        }

        let mut out = [0u8; TICKET_NUMBER_LEN];
        for (i, &b) in raw.iter().enumerate() {
            out[i] = match i {
                2 => match b {
                    b'A'..=b'Z' => b,
                    b'a'..=b'z' => b - (b'a' - b'A'),
                    _ => return err!(OrbLottoErrorCode::InvalidTicketFormat),
                },
                3 => match b {
                    b' ' => b,
                    _ => return err!(OrbLottoErrorCode::InvalidTicketFormat),
                },
                _ => match b {
                    b'0'..=b'9' => b,
                    _ => return err!(OrbLottoErrorCode::InvalidTicketFormat),
                },
            };
        }
        Ok(Self(out))
    }

    /// Revalidates bytes read back from an account. Persisted numbers are
    /// always written normalized, so this only fails on corrupted data.
    pub fn from_bytes(raw: &[u8; TICKET_NUMBER_LEN]) -> Result<Self> {
        for (i, &b) in raw.iter().enumerate() {
            let ok = match i {
                2 => b.is_ascii_uppercase(),
                3 => b == b' ',
                _ => b.is_ascii_digit(),
            };
            if !ok {
                return err!(OrbLottoErrorCode::InvalidTicketFormat);
            }
        }
        Ok(Self(*raw))
    }

    /// Derives a ticket number from 32 bytes of hash output.
    ///
    /// Prefix, letter and serial come from independent 64-bit words, each
    /// reduced with a multiply-shift. The reduction bias is bounded by
    /// range/2^64 (< 2^-44 for the largest range), far below anything a
    /// player could exploit.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let prefix = uniform_below(read_u64(seed, 0), 100) as u32;
        let letter = b'A' + uniform_below(read_u64(seed, 8), 26) as u8;
        let serial = uniform_below(read_u64(seed, 16), 100_000) as u32;
        Self::from_parts(prefix, letter, serial)
    }

    fn from_parts(prefix: u32, letter: u8, serial: u32) -> Self {
        let mut out = [0u8; TICKET_NUMBER_LEN];
        out[0] = b'0' + (prefix / 10 % 10) as u8;
        out[1] = b'0' + (prefix % 10) as u8;
        out[2] = letter;
        out[3] = b' ';

        let mut rest = serial;
        for slot in out[SERIAL_OFFSET..].iter_mut().rev() {
            *slot = b'0' + (rest % 10) as u8;
            rest /= 10;
        }
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; TICKET_NUMBER_LEN] {
        &self.0
    }

    /// Last `k` digits of the 5-digit serial, `1 <= k <= 5`.
    pub fn suffix(&self, k: usize) -> Result<&[u8]> {
        if k == 0 || k > TICKET_NUMBER_LEN - SERIAL_OFFSET {
            return err!(OrbLottoErrorCode::InvalidSuffixLength);
        }
        Ok(&self.0[TICKET_NUMBER_LEN - k..])
    }

    /// Infallible variant for the fixed tier-match widths.
    pub(crate) fn last_digits(&self, k: usize) -> &[u8] {
        &self.0[TICKET_NUMBER_LEN - k.min(TICKET_NUMBER_LEN - SERIAL_OFFSET)..]
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

/// Maps a uniform u64 onto `[0, n)` via multiply-shift.
fn uniform_below(x: u64, n: u64) -> u64 {
    (((x as u128) * (n as u128)) >> 64) as u64
}

fn read_u64(seed: &[u8; 32], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&seed[offset..offset + 8]);
    u64::from_le_bytes(word)
}

/// Seed material for issuing one ticket number. The purchase index keeps
/// numbers distinct across a buyer's tickets; slot and timestamp keep them
/// distinct across identical retries.
pub fn ticket_seed(draw: &Pubkey, buyer: &Pubkey, index: u32, slot: u64, unix_ts: i64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"ORB_TICKET_V1");
    hasher.update(draw.as_ref());
    hasher.update(buyer.as_ref());
    hasher.update(index.to_le_bytes());
    hasher.update(slot.to_le_bytes());
    hasher.update(unix_ts.to_le_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_wire_format() {
        let ticket = TicketNumber::parse("15G 12902").unwrap();
        assert_eq!(ticket.as_bytes(), b"15G 12902");
        assert_eq!(ticket.to_string(), "15G 12902");
    }

    #[test]
    fn parse_normalizes_lowercase_letters() {
        let ticket = TicketNumber::parse("15g 12902").unwrap();
        assert_eq!(ticket.to_string(), "15G 12902");
        assert_eq!(ticket, TicketNumber::parse("15G 12902").unwrap());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let bad = [
            "",
            "15G12902",      // missing separator
            "15G  12902",    // double space
            "1G 12902",      // short prefix
            "155G 12902",    // long prefix
            "15G 1290",      // short serial
            "15G 129021",    // long serial
            "15? 12902",     // not a letter
            "159 12902",     // digit where the letter goes
            "A5G 12902",     // letter in the prefix
            "15G 1290a",     // letter in the serial
            "15G\t12902",    // wrong separator
            " 15G 12902",    // leading junk
            "15G 12902 ",    // trailing junk
        ];
        for input in bad {
            assert!(TicketNumber::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn from_bytes_rejects_unnormalized_data() {
        assert!(TicketNumber::from_bytes(b"15g 12902").is_err());
        assert!(TicketNumber::from_bytes(b"15G-12902").is_err());
        assert!(TicketNumber::from_bytes(b"15G 12902").is_ok());
    }

    #[test]
    fn generated_numbers_round_trip_through_parse() {
        for i in 0u32..500 {
            let seed = ticket_seed(
                &Pubkey::new_unique(),
                &Pubkey::new_unique(),
                i,
                1_000 + i as u64,
                1_700_000_000 + i as i64,
            );
            let ticket = TicketNumber::from_seed(&seed);
            let reparsed = TicketNumber::parse(&ticket.to_string()).unwrap();
            assert_eq!(ticket, reparsed);
        }
    }

    #[test]
    fn from_seed_is_deterministic() {
        let seed = [7u8; 32];
        assert_eq!(TicketNumber::from_seed(&seed), TicketNumber::from_seed(&seed));
    }

    #[test]
    fn from_seed_covers_the_full_letter_and_digit_ranges() {
        // With 2k samples every letter should appear and the serial should
        // exercise both low and high zero-padded values.
        let mut letters = [false; 26];
        let mut saw_low_serial = false;
        for i in 0u64..2_000 {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&i.wrapping_mul(0x9E37_79B9_7F4A_7C15).to_le_bytes());
            seed[8..16].copy_from_slice(&i.wrapping_mul(0xC2B2_AE3D_27D4_EB4F).to_le_bytes());
            seed[16..24].copy_from_slice(&i.wrapping_mul(0x1656_67B1_9E37_79F9).to_le_bytes());
            let ticket = TicketNumber::from_seed(&seed);
            letters[(ticket.as_bytes()[2] - b'A') as usize] = true;
            if &ticket.as_bytes()[4..6] == b"00" {
                saw_low_serial = true;
            }
        }
        assert!(letters.iter().all(|&seen| seen));
        assert!(saw_low_serial);
    }

    #[test]
    fn suffix_returns_serial_tails() {
        let ticket = TicketNumber::parse("93A 29521").unwrap();
        assert_eq!(ticket.suffix(5).unwrap(), b"29521");
        assert_eq!(ticket.suffix(4).unwrap(), b"9521");
        assert_eq!(ticket.suffix(1).unwrap(), b"1");
        assert!(ticket.suffix(0).is_err());
        assert!(ticket.suffix(6).is_err());
    }

    #[test]
    fn ticket_seed_varies_with_every_input() {
        let draw = Pubkey::new_unique();
        let buyer = Pubkey::new_unique();
        let base = ticket_seed(&draw, &buyer, 0, 10, 100);
        assert_ne!(base, ticket_seed(&draw, &buyer, 1, 10, 100));
        assert_ne!(base, ticket_seed(&draw, &buyer, 0, 11, 100));
        assert_ne!(base, ticket_seed(&draw, &buyer, 0, 10, 101));
        assert_ne!(base, ticket_seed(&Pubkey::new_unique(), &buyer, 0, 10, 100));
    }
}
