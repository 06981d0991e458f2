#![doc = include_str!("../README.md")]

pub mod config;
pub mod endpoints;
pub mod error;
pub mod html;
pub mod person;
pub mod role;
pub mod selectors;
pub mod session;
pub mod transport;
pub mod wrap;


pub use config::{ClientConfig, Credentials};
pub use endpoints::*;
pub use error::{BoxrecError, Result, TransportError};
pub use person::{PersonResolver, ProfilePage, ProfileRequest};
pub use role::{ColumnExpectation, Role, RoleExpectations, RoleVocabulary};
pub use session::{login, Cookie, Session};
pub use transport::{FetchProfile, ReqwestTransport, Transport};
pub use wrap::{ParamWrapCache, WrapFamily};
