//! Unit tests for the server registry bounded context.
