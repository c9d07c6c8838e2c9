#![no_main]

use arbitrary::Arbitrary;
use docsearch_text::{is_subsequence, score, segments, RegionFinder};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    query: &'a str,
    names: Vec<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let mut finder = RegionFinder::new(input.query);
    for name in input.names.iter().take(64) {
        let regions = finder.find(name);
        let units = name.encode_utf16().count();

        assert_eq!(!regions.is_empty(), !finder.is_blank() && is_subsequence(name, input.query));

        let mut prev_end: Option<usize> = None;
        for region in &regions {
            assert!(region.start <= region.end);
            assert!(region.end < units);
            if let Some(prev) = prev_end {
                assert!(region.start > prev);
            }
            prev_end = Some(region.end);
        }

        if !regions.is_empty() {
            assert!(score(name, &regions).is_finite());
        }
        let rebuilt: String = segments(name, &regions).iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, *name);
    }
});
