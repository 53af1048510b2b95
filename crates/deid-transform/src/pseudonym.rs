//! Pseudonym generation and the per-run persona ledger.

use std::collections::BTreeMap;

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

use deid_model::CellValue;

/// One generated pseudonym bundle: name pair, email address, phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub phone: String,
}

impl Persona {
    /// Draws a fresh persona from the given RNG.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            given_name: FirstName().fake_with_rng::<String, _>(rng),
            family_name: LastName().fake_with_rng::<String, _>(rng),
            email: SafeEmail().fake_with_rng::<String, _>(rng),
            phone: PhoneNumber().fake_with_rng::<String, _>(rng),
        }
    }
}

/// A plausible email address unrelated to any persona.
pub fn fresh_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng::<String, _>(rng)
}

/// A plausible phone number unrelated to any persona.
pub fn fresh_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    PhoneNumber().fake_with_rng::<String, _>(rng)
}

/// Per-run mapping from identifier values to generated personas.
///
/// Every row carrying the same identifier resolves to the same persona for
/// the duration of one run, so name, email, and phone stay consistent with
/// each other. Missing identifiers share one persona. The ledger is never
/// persisted; runs are independent unless the RNG is seeded.
#[derive(Debug, Default)]
pub struct PersonaLedger {
    personas: BTreeMap<Option<String>, Persona>,
}

impl PersonaLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the persona recorded for `key`, generating one on first sight.
    pub fn persona_for<R: Rng + ?Sized>(&mut self, key: &CellValue, rng: &mut R) -> &Persona {
        let key = key.as_text().map(str::to_string);
        self.personas
            .entry(key)
            .or_insert_with(|| Persona::generate(rng))
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
