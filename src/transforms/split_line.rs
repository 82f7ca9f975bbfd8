use crate::model::FieldList;

/// Split one raw line into ordered field values on every occurrence of the
/// delimiter.
///
/// No trimming and no type coercion happen here; empty trailing fields are
/// preserved as empty strings, so a line with `k` delimiters always yields
/// `k + 1` fields. Lines that are not valid text never reach this function:
/// the source reports them as `MalformedLine` while decoding.
pub fn split_line(line: &str, delimiter: char) -> FieldList {
    FieldList(line.split(delimiter).map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_delimiter() {
        let fields = split_line("1|2016-03-15|5|123|CityA|SP|00000|0.0|0.0", '|');
        assert_eq!(fields.len(), 9);
        assert_eq!(fields.0[1], "2016-03-15");
        assert_eq!(fields.0[5], "SP");
    }

    #[test]
    fn k_delimiters_yield_k_plus_one_fields() {
        for line in ["a", "a|b", "a|b|c", "|||"] {
            let delimiters = line.matches('|').count();
            assert_eq!(split_line(line, '|').len(), delimiters + 1);
        }
    }

    #[test]
    fn preserves_empty_trailing_fields() {
        let fields = split_line("1|SP||", '|');
        assert_eq!(fields.0, vec!["1", "SP", "", ""]);
    }

    #[test]
    fn does_not_trim_whitespace() {
        let fields = split_line(" 1 | SP ", '|');
        assert_eq!(fields.0, vec![" 1 ", " SP "]);
    }

    #[test]
    fn honors_alternate_delimiters() {
        let fields = split_line("1;2;3", ';');
        assert_eq!(fields.0, vec!["1", "2", "3"]);
    }
}
