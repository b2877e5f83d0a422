//! Shared type definitions for Nexus
//!
//! This crate contains the lightweight models exchanged with the Nexus REST API
//! together with the client-side rules that operate on them (role checks, form
//! validation, event status). It has no browser or UI dependencies so every
//! rule here is unit tested on the host.

pub mod auth;
pub mod community;
pub mod events;
pub mod users;
pub mod validation;

/// Deserialize a JSON `null` as the type's default value.
///
/// The API omits or nulls optional collections and counters freely, so most
/// models pair this with `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
