//! Rust aggregator (`mod.rs`) and error re-exports (`error.rs`).

use cdp_schema::Domain;
use codegen::Scope;

use crate::render::{rust_module_name, rust_type_name};

/// Module declarations plus the façade struct holding one lazily
/// constructed client per domain.
pub fn generate_facade(domains: &[Domain], facade_name: &str, rt: &str) -> String {
    let mut scope = Scope::new();

    let def = scope.new_struct(facade_name);
    def.vis("pub");
    def.generic("T");
    def.bound("T", format!("{rt}::Transport"));
    def.doc("Entry point exposing every protocol domain over one transport.");
    def.field("transport", "::std::sync::Arc<T>");
    for domain in domains {
        let module = rust_module_name(&domain.domain);
        def.field(
            &module,
            format!(
                "{rt}::DomainSlot<{module}::{}<T>>",
                rust_type_name(&domain.domain)
            ),
        );
    }

    let methods = scope.new_impl(facade_name);
    methods.generic("T");
    methods.target_generic("T");
    methods.bound("T", format!("{rt}::Transport"));

    let new = methods.new_fn("new");
    new.vis("pub");
    new.doc("Wrap `transport`, attaching it first if it is not attached yet.");
    new.arg("transport", "::std::sync::Arc<T>");
    new.ret(format!("Result<Self, {rt}::SessionError>"));
    new.line(format!("{rt}::attach_transport(&*transport)?;"));
    new.line("Ok(Self {");
    new.line("    transport,");
    for domain in domains {
        new.line(format!(
            "    {}: {rt}::DomainSlot::new(),",
            rust_module_name(&domain.domain)
        ));
    }
    new.line("})");

    let transport = methods.new_fn("transport");
    transport.vis("pub");
    transport.arg_ref_self();
    transport.ret("&::std::sync::Arc<T>");
    transport.line("&self.transport");

    for domain in domains {
        let module = rust_module_name(&domain.domain);
        let accessor = methods.new_fn(&module);
        accessor.vis("pub");
        accessor.doc(&format!(
            "The `{}` domain, constructed on first access.",
            domain.domain
        ));
        accessor.arg_ref_self();
        accessor.ret(format!(
            "Result<&{module}::{}<T>, {rt}::SessionError>",
            rust_type_name(&domain.domain)
        ));
        accessor.line(format!("self.{module}.get_or_init(&self.transport)"));
    }

    scope.to_string()
}

/// Contents of `error.rs`: the runtime's error types, re-exported.
pub fn generate_error_file(rt: &str) -> String {
    format!(
        "//! Errors raised by generated clients.\n\npub use {rt}::{{CallError, PayloadError, ProtocolError, SessionError, TransportError}};\n"
    )
}
