use super::*;

#[test]
fn digits_map_one_to_one() {
    assert_eq!(native_numerals(0), "٠");
    assert_eq!(native_numerals(7), "٧");
    assert_eq!(native_numerals(286), "٢٨٦");
    assert_eq!(native_numerals(1090), "١٠٩٠");
}

#[test]
fn range_collapses_single_passage() {
    assert_eq!(native_range(5, 5), "٥");
    assert_eq!(native_range(1, 7), "١-٧");
}
