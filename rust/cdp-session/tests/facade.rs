//! A hand-written façade in the shape the Rust target generates, exercised
//! end to end against the mock transport.

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cdp_session::{
    CallError, Domain, DomainClient, DomainSlot, ListenerId, SessionError, Transport,
    TransportError,
};
use support::MockTransport;

mod widget {
    use super::*;

    pub struct Widget<T: Transport> {
        client: DomainClient<T>,
    }

    impl<T: Transport> Domain<T> for Widget<T> {
        const NAME: &'static str = "Widget";

        fn new(transport: Arc<T>) -> Result<Self, SessionError> {
            Ok(Self {
                client: DomainClient::new(transport, Self::NAME, true)?,
            })
        }
    }

    impl<T: Transport> Widget<T> {
        pub async fn ping(&self) -> Result<(), CallError> {
            self.client.call("ping", None).await.map(|_| ())
        }

        pub fn on_ready(&self, listener: impl Fn() + Send + Sync + 'static) -> ListenerId {
            self.client.on("ready", move |_| listener())
        }
    }
}

mod gadget {
    use super::*;

    pub mod results {
        use facet::Facet;

        #[derive(Debug, Facet)]
        pub struct Status {
            pub state: String,
        }
    }

    pub struct Gadget<T: Transport> {
        client: DomainClient<T>,
    }

    impl<T: Transport> Domain<T> for Gadget<T> {
        const NAME: &'static str = "Gadget";

        fn new(transport: Arc<T>) -> Result<Self, SessionError> {
            Ok(Self {
                client: DomainClient::new(transport, Self::NAME, false)?,
            })
        }
    }

    impl<T: Transport> Gadget<T> {
        pub async fn status(&self) -> Result<results::Status, CallError> {
            self.client.fetch("status").await
        }
    }
}

struct Protocol<T: Transport> {
    transport: Arc<T>,
    widget: DomainSlot<widget::Widget<T>>,
    gadget: DomainSlot<gadget::Gadget<T>>,
}

impl<T: Transport> Protocol<T> {
    fn new(transport: Arc<T>) -> Result<Self, SessionError> {
        cdp_session::attach_transport(&*transport)?;
        Ok(Self {
            transport,
            widget: DomainSlot::new(),
            gadget: DomainSlot::new(),
        })
    }

    fn widget(&self) -> Result<&widget::Widget<T>, SessionError> {
        self.widget.get_or_init(&self.transport)
    }

    fn gadget(&self) -> Result<&gadget::Gadget<T>, SessionError> {
        self.gadget.get_or_init(&self.transport)
    }
}

#[test]
fn facade_attaches_a_detached_transport() {
    let transport = MockTransport::detached();
    let _protocol = Protocol::new(Arc::clone(&transport)).unwrap();
    assert!(transport.is_attached_now());
    assert_eq!(transport.attach_calls(), 1);
}

#[test]
fn facade_leaves_an_attached_transport_alone() {
    let transport = MockTransport::attached();
    let _protocol = Protocol::new(Arc::clone(&transport)).unwrap();
    assert_eq!(transport.attach_calls(), 0);
}

#[test]
fn attach_failure_is_reported() {
    let transport = MockTransport::refusing_attach();
    let err = Protocol::new(transport).err().unwrap();
    assert!(matches!(
        err,
        SessionError::Attach(TransportError::AttachFailed(_))
    ));
}

#[test]
fn accessors_are_lazy_and_memoized() {
    let transport = MockTransport::attached();
    let protocol = Protocol::new(Arc::clone(&transport)).unwrap();
    assert!(protocol.widget.get().is_none());
    assert_eq!(transport.subscriptions(), 0);

    let first = protocol.widget().unwrap() as *const _;
    let second = protocol.widget().unwrap() as *const _;
    assert_eq!(first, second);
    // Widget has events, Gadget does not: one subscription in total.
    let gadget = protocol.gadget().unwrap() as *const _ as *const ();
    assert_ne!(first as *const (), gadget);
    assert_eq!(transport.subscriptions(), 1);
}

#[tokio::test]
async fn ping_sends_one_empty_command_and_resolves_empty() {
    let transport = MockTransport::attached();
    let protocol = Protocol::new(Arc::clone(&transport)).unwrap();

    protocol.widget().unwrap().ping().await.unwrap();

    assert_eq!(
        transport.sent(),
        vec![("Widget.ping".to_string(), "{}".to_string())]
    );
}

#[tokio::test]
async fn domains_share_the_transport() {
    let transport = MockTransport::attached();
    transport.reply_ok("Gadget.status", r#"{"state":"idle"}"#);
    let protocol = Protocol::new(Arc::clone(&transport)).unwrap();

    protocol.widget().unwrap().ping().await.unwrap();
    let status = protocol.gadget().unwrap().status().await.unwrap();

    assert_eq!(status.state, "idle");
    let methods: Vec<String> = transport.sent().into_iter().map(|(m, _)| m).collect();
    assert_eq!(methods, ["Widget.ping", "Gadget.status"]);
}

#[test]
fn domain_construction_fails_on_a_detached_transport() {
    let transport = MockTransport::detached();
    let slot: DomainSlot<widget::Widget<MockTransport>> = DomainSlot::new();

    let err = slot.get_or_init(&transport).err().unwrap();
    assert!(matches!(err, SessionError::NotAttached { domain: "Widget" }));
    assert!(slot.get().is_none());
}

#[test]
fn signal_only_events_call_listeners_without_params() {
    let transport = MockTransport::attached();
    let protocol = Protocol::new(Arc::clone(&transport)).unwrap();

    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    protocol.widget().unwrap().on_ready(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    transport.emit("Widget.ready", "{}");
    transport.emit("Gadget.ready", "{}");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
