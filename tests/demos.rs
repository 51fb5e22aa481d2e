use std::fs;

use fab::get_result;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Every `demos/*.fab` script must print exactly its sibling `.out` file.
#[test]
fn demo_scripts_match_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "fab")
                                      })
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        match get_result(&script) {
            Ok(output) => assert_eq!(output, expected, "demo {path:?}"),
            Err(e) => panic!("Demo {path:?} failed:\n{script}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
