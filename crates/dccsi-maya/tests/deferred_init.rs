mod common;

use common::RecordingHost;
use dccsi_maya::{Detached, EmbeddedHost, ImportError, MayaPackage};

#[test]
fn test_declared_is_empty_after_load() {
    let package = MayaPackage::with_dev_mode(Detached, false);
    assert!(package.declared().is_empty());
    assert!(!package.dev_mode());
}

#[test]
fn test_init_declares_host_submodules_in_order() {
    let mut package = MayaPackage::with_dev_mode(common::maya(), false);
    let result = package.init();
    assert!(result.is_ok(), "init failed with: {:?}", result.err());
    assert_eq!(package.declared(), ["callbacks", "helpers", "toolbits"]);
}

#[test]
fn test_init_declares_same_names_in_dev_mode() {
    let mut package = MayaPackage::with_dev_mode(common::maya_with_submodules(), true);
    package.init().unwrap();
    assert_eq!(package.declared(), ["callbacks", "helpers", "toolbits"]);
}

#[test]
fn test_init_outside_host_fails_and_declares_nothing() {
    let mut package = MayaPackage::with_dev_mode(Detached, false);
    let before = package.declared().len();

    let err = package.init().unwrap_err();
    assert_eq!(
        err,
        ImportError::NotEmbedded {
            module: "maya.cmds".to_string()
        }
    );
    assert_eq!(package.declared().len(), before);
}

#[test]
fn test_init_with_partial_native_api_declares_nothing() {
    // maya.cmds is present but OpenMaya is not, so nothing may be declared.
    let host = EmbeddedHost::new("maya").with_module("maya.cmds");
    let mut package = MayaPackage::with_dev_mode(host, false);

    let err = package.init().unwrap_err();
    assert!(matches!(
        err,
        ImportError::ModuleNotFound { ref module, .. } if module == "maya.api.OpenMaya"
    ));
    assert!(package.declared().is_empty());
}

#[test]
fn test_init_is_idempotent() {
    let mut package = MayaPackage::with_dev_mode(common::maya(), false);
    package.init().unwrap();
    package.init().unwrap();
    assert_eq!(package.declared(), ["callbacks", "helpers", "toolbits"]);
}

#[test]
fn test_init_imports_native_apis_in_order() {
    let host = RecordingHost::new(common::maya());
    let mut package = MayaPackage::with_dev_mode(&host, false);
    package.init().unwrap();
    assert_eq!(host.imports(), ["maya.cmds", "maya.api.OpenMaya"]);
}

#[test]
fn test_no_self_test_without_dev_mode() {
    let host = RecordingHost::new(common::maya_with_submodules());
    let mut package = MayaPackage::with_dev_mode(&host, false);
    assert!(host.imports().is_empty());

    package.init().unwrap();
    assert!(host.self_test_imports().is_empty());
}

#[test]
fn test_dev_mode_self_test_runs_after_init() {
    let host = RecordingHost::new(common::maya_with_submodules());
    let mut package = MayaPackage::with_dev_mode(&host, true);
    // Nothing is declared yet, so the load-time self-test has nothing to import.
    assert!(host.imports().is_empty());

    package.init().unwrap();
    assert_eq!(
        host.self_test_imports(),
        [
            "azpy.maya.callbacks",
            "azpy.maya.helpers",
            "azpy.maya.toolbits"
        ]
    );
}

#[test]
fn test_self_test_failures_are_counted_not_raised() {
    // The native API is present but the submodules themselves fail to import.
    let mut package = MayaPackage::with_dev_mode(common::maya(), true);
    let result = package.init();
    assert!(result.is_ok(), "init failed with: {:?}", result.err());
    assert_eq!(package.test_imports(), 3);
}
