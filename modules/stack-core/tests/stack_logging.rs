use std::sync::{Arc, Mutex};

use bounded_stack_core_rs::collections::stack::{BoundedStack, ByteStack, LOG_TARGET};
use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
  subscriber::with_default,
};

#[derive(Clone, Debug)]
struct RecordedEvent {
  level:   Level,
  target:  String,
  message: String,
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
  events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingSubscriber {
  fn events(&self) -> Vec<RecordedEvent> {
    self.events.lock().unwrap().clone()
  }

  fn messages_at(&self, level: Level) -> Vec<String> {
    self.events().into_iter().filter(|event| event.level == level).map(|event| event.message).collect()
  }
}

#[derive(Default)]
struct MessageVisitor {
  message: String,
}

impl Visit for MessageVisitor {
  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    if field.name() == "message" {
      self.message = format!("{value:?}");
    }
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _span: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _span: &Id, _values: &Record<'_>) {}

  fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);
    self.events.lock().unwrap().push(RecordedEvent {
      level:   *event.metadata().level(),
      target:  event.metadata().target().to_owned(),
      message: visitor.message,
    });
  }

  fn enter(&self, _span: &Id) {}

  fn exit(&self, _span: &Id) {}
}

#[test]
fn lifecycle_events_are_logged_at_debug() {
  let collector = RecordingSubscriber::default();
  with_default(collector.clone(), || {
    let mut stack = BoundedStack::<u32>::with_capacity(2).unwrap();
    stack.push(1).unwrap();
    stack.clear().unwrap();
    stack.destroy().unwrap();
  });

  assert_eq!(collector.messages_at(Level::DEBUG), ["stack initialized", "stack cleared", "stack destroyed"]);
  assert!(collector.events().iter().all(|event| event.target == LOG_TARGET));
}

#[test]
fn element_operations_are_logged_at_trace() {
  let collector = RecordingSubscriber::default();
  with_default(collector.clone(), || {
    let mut stack = ByteStack::with_capacity(1, 1).unwrap();
    stack.push(&[1]).unwrap();
    let mut out = [0_u8; 1];
    stack.pop(&mut out).unwrap();
  });

  assert_eq!(collector.messages_at(Level::TRACE), ["pushed record", "popped record"]);
}

#[test]
fn allocation_failure_is_logged_at_warn() {
  let collector = RecordingSubscriber::default();
  with_default(collector.clone(), || {
    assert!(ByteStack::with_capacity(usize::MAX, 8).is_err());
  });

  assert_eq!(collector.messages_at(Level::WARN), ["failed to reserve stack storage"]);
}

#[test]
fn failed_operations_do_not_log_lifecycle_events() {
  let collector = RecordingSubscriber::default();
  with_default(collector.clone(), || {
    let mut stack = BoundedStack::<u32>::new();
    assert!(stack.push(1).is_err());
    assert!(stack.clear().is_err());
    assert!(stack.destroy().is_ok());
  });

  assert!(collector.events().is_empty());
}
