use super::ArcShared;

#[test]
fn deref_exposes_inner_value() {
  let shared = ArcShared::new(41_u32);
  assert_eq!(*shared + 1, 42);
}

#[test]
fn try_unwrap_succeeds_for_unique_handle() {
  let shared = ArcShared::new(7_u8);
  assert_eq!(shared.try_unwrap().ok(), Some(7));
}

#[test]
fn try_unwrap_returns_handle_while_shared() {
  let shared = ArcShared::new(7_u8);
  let other = shared.clone();
  let shared = match shared.try_unwrap() {
    | Ok(_) => panic!("unwrap must fail while a clone is alive"),
    | Err(handle) => handle,
  };
  drop(other);
  assert_eq!(shared.try_unwrap().ok(), Some(7));
}
