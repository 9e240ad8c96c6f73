use std::fmt;

/// One benchmark instance, assembled from an 11-line block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub instance_label: String,
    /// Instance token, validated as an integer literal of any width.
    pub instance_number: String,
    pub k: String,
    pub expanded_builtin: String,
    pub search_time_builtin: String,
    pub total_time_builtin: String,
    pub expanded_planopt: String,
    pub search_time_planopt: String,
    pub total_time_planopt: String,
}

/// Renders the CSV row: label, k, then search/total/expanded per variant.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{}",
            self.instance_label,
            self.k,
            self.search_time_builtin,
            self.total_time_builtin,
            self.expanded_builtin,
            self.search_time_planopt,
            self.total_time_planopt,
            self.expanded_planopt,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order() {
        let r = Record {
            instance_label: "8-5-017".into(),
            instance_number: "017".into(),
            k: "3".into(),
            expanded_builtin: "120".into(),
            search_time_builtin: "0.01s".into(),
            total_time_builtin: "0.02s".into(),
            expanded_planopt: "80".into(),
            search_time_planopt: "0.005s".into(),
            total_time_planopt: "0.009s".into(),
        };
        assert_eq!(r.to_string(), "8-5-017,3,0.01s,0.02s,120,0.005s,0.009s,80");
    }

    #[test]
    fn no_quoting() {
        let r = Record {
            instance_label: "8-5-1".into(),
            k: "a b".into(),
            ..Default::default()
        };
        let row = r.to_string();
        assert!(row.starts_with("8-5-1,a b,"));
        assert_eq!(row.split(',').count(), 8);
    }
}
