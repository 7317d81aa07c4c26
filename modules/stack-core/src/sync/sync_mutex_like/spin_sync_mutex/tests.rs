use super::SpinSyncMutex;
use crate::{collections::stack::BoundedStack, sync::SyncMutexLike};

#[test]
fn lock_grants_mutable_access() {
  let mutex = SpinSyncMutex::new(BoundedStack::with_capacity(2).unwrap());
  mutex.lock().push(3_u32).unwrap();
  assert_eq!(mutex.lock().len(), 1);
  assert_eq!(mutex.into_inner().pop(), Ok(3));
}

#[test]
fn trait_methods_delegate_to_inherent_ones() {
  let mutex = <SpinSyncMutex<u8> as SyncMutexLike<u8>>::new(1);
  *<SpinSyncMutex<u8> as SyncMutexLike<u8>>::lock(&mutex) += 1;
  assert_eq!(<SpinSyncMutex<u8> as SyncMutexLike<u8>>::into_inner(mutex), 2);
}

#[test]
fn try_lock_fails_while_held() {
  let mutex = SpinSyncMutex::new(0_u8);
  let guard = mutex.lock();
  assert!(mutex.is_locked());
  assert!(mutex.try_lock().is_none());
  drop(guard);

  assert!(!mutex.is_locked());
  *mutex.try_lock().unwrap() = 5;
  assert_eq!(*mutex.lock(), 5);
}
