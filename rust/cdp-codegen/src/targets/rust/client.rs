//! Rust domain client generation.
//!
//! Generates the `<Domain><T: Transport>` struct, its `Domain` impl, and an
//! inherent impl with one async method per command and `on_*` / `once_*`
//! methods per event.

use cdp_schema::{Command, Domain, Event};
use codegen::{Function, Scope};

use crate::render::{doc_lines, rust_ident, rust_type_name, rustdoc_tag};

fn doc_text(
    description: Option<&str>,
    experimental: Option<bool>,
    deprecated: Option<bool>,
) -> Option<String> {
    let lines = doc_lines(description, experimental, deprecated, None, rustdoc_tag);
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Render the client for `domain` against the runtime crate at `rt`.
pub fn generate_client(domain: &Domain, rt: &str) -> String {
    let name = rust_type_name(&domain.domain);
    let mut scope = Scope::new();

    let def = scope.new_struct(&name);
    def.vis("pub");
    def.generic("T");
    def.bound("T", format!("{rt}::Transport"));
    if let Some(doc) = doc_text(
        domain.description.as_deref(),
        domain.experimental,
        domain.deprecated,
    ) {
        def.doc(&doc);
    }
    def.field("client", format!("{rt}::DomainClient<T>"));

    scope.raw(format!(
        "impl<T: {rt}::Transport> {rt}::Domain<T> for {name}<T> {{
    const NAME: &'static str = {wire:?};

    fn new(transport: ::std::sync::Arc<T>) -> Result<Self, {rt}::SessionError> {{
        Ok(Self {{
            client: {rt}::DomainClient::new(transport, Self::NAME, {has_events})?,
        }})
    }}
}}",
        wire = domain.domain,
        has_events = domain.has_events(),
    ));

    let methods = scope.new_impl(&name);
    methods.generic("T");
    methods.target_generic("T");
    methods.bound("T", format!("{rt}::Transport"));

    for command in &domain.commands {
        write_command(methods.new_fn(&rust_ident(&command.name)), command, rt);
    }

    for event in domain.events() {
        for once in [false, true] {
            let prefix = if once { "once" } else { "on" };
            let method = rust_ident(&format!("{prefix}_{}", event.name));
            write_subscription(methods.new_fn(&method), event, once, rt);
        }
    }

    if domain.has_events() {
        let off = methods.new_fn("off");
        off.vis("pub");
        off.doc("Remove a listener added by one of the `on_*` / `once_*` methods.");
        off.arg_ref_self();
        off.arg("id", format!("{rt}::ListenerId"));
        off.ret("bool");
        off.line("self.client.off(id)");
    }

    scope.to_string()
}

fn write_command(f: &mut Function, command: &Command, rt: &str) {
    let wire = format!("{:?}", command.name);
    let type_name = rust_type_name(&command.name);

    f.vis("pub");
    f.set_async(true);
    if let Some(doc) = doc_text(
        command.description.as_deref(),
        command.experimental,
        command.deprecated,
    ) {
        f.doc(&doc);
    }
    f.arg_ref_self();

    let params = if !command.has_params() {
        None
    } else if command.has_mandatory_params() {
        f.arg("params", format!("&params::{type_name}"));
        Some("Some(params)")
    } else {
        f.arg("params", format!("Option<&params::{type_name}>"));
        Some("params")
    };

    if command.has_returns() {
        f.ret(format!("Result<results::{type_name}, {rt}::CallError>"));
        match params {
            Some(params) => f.line(format!("self.client.invoke({wire}, {params}).await")),
            None => f.line(format!("self.client.fetch({wire}).await")),
        };
    } else {
        f.ret(format!("Result<(), {rt}::CallError>"));
        match params {
            Some(params) => f.line(format!(
                "self.client.send({wire}, {params}).await.map(|_| ())"
            )),
            None => f.line(format!("self.client.call({wire}, None).await.map(|_| ())")),
        };
    }
}

fn write_subscription(f: &mut Function, event: &Event, once: bool, rt: &str) {
    let wire = format!("{:?}", event.name);

    f.vis("pub");
    if let Some(doc) = doc_text(
        event.description.as_deref(),
        event.experimental,
        event.deprecated,
    ) {
        f.doc(&doc);
    }
    f.arg_ref_self();
    f.ret(format!("{rt}::ListenerId"));

    if event.is_signal_only() {
        let method = if once { "once" } else { "on" };
        f.arg("listener", "impl Fn() + Send + Sync + 'static");
        f.line(format!(
            "self.client.{method}({wire}, move |_| listener())"
        ));
    } else {
        let method = if once { "once_typed" } else { "on_typed" };
        f.arg(
            "listener",
            format!(
                "impl Fn(events::{}) + Send + Sync + 'static",
                rust_type_name(&event.name)
            ),
        );
        f.line(format!("self.client.{method}({wire}, listener)"));
    }
}
