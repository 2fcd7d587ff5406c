//! Built-in stub templates.
//!
//! The source and test stubs written into every scaffolded module when the
//! user does not supply their own template files. Each contains the `???`
//! placeholder, replaced with the module name at render time.

use gantry_core::domain::StubTemplate;
use gantry_core::error::GantryResult;

const SOURCE_STUB: &str = r#"import Foundation

public final class ??? {
    public static func hello() {
        print("Hello, from ???")
    }
}
"#;

const TEST_STUB: &str = r#"import Foundation
import XCTest

final class ???Tests: XCTestCase {
    func test_example() {
        XCTAssertEqual("???", "???")
    }
}
"#;

/// The default source-file stub.
pub fn source_stub() -> GantryResult<StubTemplate> {
    Ok(StubTemplate::new(SOURCE_STUB)?)
}

/// The default test-file stub.
pub fn test_stub() -> GantryResult<StubTemplate> {
    Ok(StubTemplate::new(TEST_STUB)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::domain::{TargetName, PLACEHOLDER};

    #[test]
    fn builtin_stubs_are_valid_templates() {
        assert!(source_stub().is_ok());
        assert!(test_stub().is_ok());
    }

    #[test]
    fn rendered_source_mentions_the_module() {
        let name = TargetName::new("AppKit0").unwrap();
        let rendered = source_stub().unwrap().render(&name);
        assert!(rendered.contains("class AppKit0"));
        assert!(rendered.contains("Hello, from AppKit0"));
        assert!(!rendered.contains(PLACEHOLDER));
    }

    #[test]
    fn rendered_test_is_an_xctest_case() {
        let name = TargetName::new("AppUI3").unwrap();
        let rendered = test_stub().unwrap().render(&name);
        assert!(rendered.contains("class AppUI3Tests: XCTestCase"));
    }
}
