// blueprint-core/src/ports/resources.rs

/// Runtime resources (HTTP sources, filesystem roots, database handles) known by name.
/// The core only asks whether a name exists; it never instantiates a resource.
pub trait ResourceCatalog {
    fn has_resource(&self, name: &str) -> bool;
}
