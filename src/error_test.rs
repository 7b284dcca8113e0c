use super::*;

#[test]
fn environment_errors_display() {
    assert_eq!(MountError::NoWindow.to_string(), "no global window");
    assert_eq!(MountError::NoDocument.to_string(), "window has no document");
    assert_eq!(MountError::NoRootElement.to_string(), "document has no root element");
}

#[test]
fn listener_error_names_event() {
    let err = MountError::Listener { event: "keydown", reason: "TypeError".into() };
    assert_eq!(err.to_string(), "failed to register keydown listener: TypeError");
}
