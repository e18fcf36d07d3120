//! # Integration Tests
//!
//! End-to-end routing flows over real tokio channels, the config-driven
//! build path, and the diagnostic-output contract.

#[cfg(test)]
mod routing_tests {
    use dispatcher::{BoundedQueue, Dispatcher, MessageQueue};

    /// Full routing scenario: explicit binding, default fallback, unbind.
    ///
    /// 1. kind 5 bound to QA, QB set as default
    /// 2. dispatch(5) lands on QA, dispatch(7) falls back to QB
    /// 3. after unbinding kind 5, dispatch(5) falls back to QB as well
    #[tokio::test]
    async fn test_route_default_and_unbind_flow() {
        let (qa, mut qa_rx) = BoundedQueue::channel("qa", 8);
        let (qb, mut qb_rx) = BoundedQueue::channel("qb", 8);

        let mut dispatcher: Dispatcher<u32, &'static str> = Dispatcher::new("test");
        dispatcher.register_route(5, Some(qa));
        dispatcher.register_default(Some(qb));

        assert!(dispatcher.dispatch(5, "x"));
        assert!(dispatcher.dispatch(7, "y"));

        dispatcher.register_route(5, None);
        assert!(dispatcher.dispatch(5, "z"));

        assert_eq!(qa_rx.recv().await, Some("x"));
        assert!(qa_rx.try_recv().is_err());
        assert_eq!(qb_rx.recv().await, Some("y"));
        assert_eq!(qb_rx.recv().await, Some("z"));

        let metrics = dispatcher.metrics();
        assert_eq!(metrics.routed_count, 1);
        assert_eq!(metrics.defaulted_count, 2);
        assert_eq!(metrics.unroutable_count, 0);
    }

    /// Queues outlive the dispatcher; dropping it must not close them.
    #[tokio::test]
    async fn test_queues_survive_dispatcher_teardown() {
        let (qa, mut qa_rx) = BoundedQueue::channel("qa", 8);

        {
            let mut dispatcher: Dispatcher<u32, u64> = Dispatcher::new("short_lived");
            dispatcher.register_route(1, Some(qa.clone()));
            assert!(dispatcher.dispatch(1, 10));
        }

        assert_eq!(qa_rx.recv().await, Some(10));
        // The handle still works after the dispatcher is gone
        assert!(qa.enqueue(11).is_ok());
        assert_eq!(qa_rx.recv().await, Some(11));
    }
}

#[cfg(test)]
mod config_tests {
    use contracts::RouterConfig;
    use dispatcher::{BoundedQueue, Dispatcher, DispatcherBuilder, RouterError};

    #[tokio::test]
    async fn test_build_from_json_and_route() {
        let config: RouterConfig<u32> = serde_json::from_str(
            r#"{
                "name": "hci_rx",
                "routes": [
                    { "kind": 2, "queue": "acl" },
                    { "kind": 4, "queue": "event" }
                ],
                "default_queue": "misc"
            }"#,
        )
        .unwrap();

        let (acl, mut acl_rx) = BoundedQueue::channel("acl", 8);
        let (event, mut event_rx) = BoundedQueue::channel("event", 8);
        let (misc, mut misc_rx) = BoundedQueue::channel("misc", 8);

        let dispatcher = DispatcherBuilder::new(config)
            .queue("acl", acl)
            .queue("event", event)
            .queue("misc", misc)
            .build()
            .unwrap();

        assert_eq!(dispatcher.name(), "hci_rx");
        assert_eq!(dispatcher.route_count(), 2);

        assert!(dispatcher.dispatch(2, "acl packet"));
        assert!(dispatcher.dispatch(4, "event packet"));
        assert!(dispatcher.dispatch(9, "vendor packet"));

        assert_eq!(acl_rx.recv().await, Some("acl packet"));
        assert_eq!(event_rx.recv().await, Some("event packet"));
        assert_eq!(misc_rx.recv().await, Some("vendor packet"));
    }

    #[test]
    fn test_dangling_queue_name_fails_build() {
        let config: RouterConfig<u32> = serde_json::from_str(
            r#"{
                "name": "hci_rx",
                "routes": [{ "kind": 2, "queue": "acl" }]
            }"#,
        )
        .unwrap();

        let result: Result<Dispatcher<u32, &str>, _> = DispatcherBuilder::new(config).build();
        assert!(matches!(result.unwrap_err(), RouterError::UnknownQueue { .. }));
    }
}

#[cfg(test)]
mod diagnostics_tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use dispatcher::{BoundedQueue, Dispatcher};
    use tracing_subscriber::fmt::MakeWriter;

    /// Writer capturing formatted log output for assertions
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// An unroutable message emits exactly one warning naming the
    /// dispatcher and the kind.
    #[test]
    fn test_unroutable_dispatch_warns_once() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let dispatcher: Dispatcher<u32, &'static str> = Dispatcher::new("hci_rx");
            assert!(!dispatcher.dispatch(9, "lost"));
        });

        let output = writer.contents();
        assert_eq!(output.matches("no handler for message kind").count(), 1);
        assert!(output.contains("hci_rx"));
        assert!(output.contains('9'));
        assert!(output.contains("WARN"));
    }

    /// A routed message produces no warning at all.
    #[test]
    fn test_routed_dispatch_is_silent() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();

        let mut rx = tracing::subscriber::with_default(subscriber, || {
            let (queue, rx) = BoundedQueue::channel("acl", 4);
            let mut dispatcher: Dispatcher<u32, &'static str> = Dispatcher::new("hci_rx");
            dispatcher.register_route(2, Some(queue));
            assert!(dispatcher.dispatch(2, "pkt"));
            rx
        });

        assert!(!writer.contents().contains("WARN"));
        assert_eq!(rx.try_recv().ok(), Some("pkt"));
    }
}
