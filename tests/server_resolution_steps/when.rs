//! When steps for server resolution BDD scenarios.

use super::world::ResolutionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use server_registry::server::{adapters::UriConnectionStringParser, ports::ConnectionStringParser};

#[when(r#"the address list "{list}" is resolved"#)]
fn resolve_address_list(world: &mut ResolutionWorld, list: String) -> Result<(), eyre::Report> {
    let parsed = UriConnectionStringParser::new()
        .parse(&list)
        .wrap_err("parse address list for scenario")?;
    let server = world.registry.resolve(parsed.addresses().clone());
    world.resolved.push(server);
    Ok(())
}

#[when(r#"the connection string "{connection_string}" is resolved"#)]
fn resolve_connection_string(
    world: &mut ResolutionWorld,
    connection_string: String,
) -> Result<(), eyre::Report> {
    let server = world
        .resolver
        .resolve(&connection_string)
        .wrap_err("resolve connection string for scenario")?;
    world.resolved.push(server);
    Ok(())
}
