use LinkedQueueMini::core::handle::QueueHandle;
use LinkedQueueMini::core::queue::Queue;

#[test]
fn test_absent_queue_operations() {
    let mut handle: Option<Queue> = None;
    assert_eq!(handle.size(), 0);
    assert!(!handle.push_back("a").unwrap());
    assert!(!handle.push_front("a").unwrap());

    let mut buf = [1u8; 4];
    assert!(!handle.pop_front_into(Some(&mut buf)));
    assert_eq!(buf, [1; 4]);

    handle.reverse();
    handle.sort();
    handle.destroy();
    assert!(handle.is_none());
}

#[test]
fn test_create_use_destroy() {
    let mut handle = <Option<Queue> as QueueHandle>::create();
    assert_eq!(handle.size(), 0);
    assert!(!handle.pop_front_into(None));

    assert!(handle.push_back("b").unwrap());
    assert!(handle.push_back("a").unwrap());
    assert!(handle.push_front("c").unwrap());
    assert_eq!(handle.size(), 3);

    handle.sort();
    let mut buf = [0u8; 8];
    assert!(handle.pop_front_into(Some(&mut buf)));
    assert_eq!(&buf[..2], b"a\0");

    handle.reverse();
    assert!(handle.pop_front_into(Some(&mut buf)));
    assert_eq!(&buf[..2], b"c\0");

    handle.destroy();
    assert_eq!(handle.size(), 0);
    // Destroying twice is harmless.
    handle.destroy();
    assert!(!handle.push_back("x").unwrap());
}
