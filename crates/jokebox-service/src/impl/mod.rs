//! Service implementations.

mod joke_service_impl;

pub use joke_service_impl::JokeServiceImpl;
