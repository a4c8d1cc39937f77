// Integration tests follow the organization suggested by Matklad:
// https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod custom_bucket;
mod introspection;
mod ordering;
#[cfg(feature = "tracing")]
mod tracing_events;
