//! Payloads exchanged between the spaceship service and its clients.
//!
//! Every read returns the nested shape: an [`Astronaut`] embeds its origin
//! [`Planet`], and the planet embeds its [`Image`]. Foreign keys only appear on
//! the write side ([`AstronautForm`], [`CreatedAstronaut`]).

pub mod dto;

pub use dto::*;
