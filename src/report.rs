use crate::config::SummaryGroup;
use crate::models::dataset::{DatasetMap, PropertySet, AVAIL, MOUNTPOINT, QUOTA, TYPE, USED};
use crate::util::human::{bytes_to_gb, fmt_gb};
use serde::Serialize;
use serde_json::{json, Value};

pub const UNLIMITED: &str = "Unlimited";

/// One row of the per-dataset detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub name:       String,
    /// `None` when no quota is set (zfs reports 0).
    pub quota_gb:   Option<f64>,
    pub used_gb:    f64,
    pub avail_gb:   f64,
    pub mountpoint: String,
    #[serde(rename = "type")]
    pub kind:       String,
}

impl DetailRow {
    pub fn quota_label(&self) -> String {
        match self.quota_gb {
            Some(gb) => fmt_gb(gb),
            None     => UNLIMITED.to_string(),
        }
    }
}

/// One row of the fixed-group summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub group:    String,
    pub used_gb:  f64,
    pub avail_gb: f64,
}

pub fn detail_rows(datasets: &DatasetMap) -> Vec<DetailRow> {
    datasets.iter().map(|(name, props)| {
        let quota = props.bytes(QUOTA);
        DetailRow {
            name:       name.to_string(),
            quota_gb:   if quota == 0 { None } else { Some(bytes_to_gb(quota)) },
            used_gb:    bytes_to_gb(props.bytes(USED)),
            avail_gb:   bytes_to_gb(props.bytes(AVAIL)),
            mountpoint: props.text(MOUNTPOINT, "-").to_string(),
            kind:       props.text(TYPE, "-").to_string(),
        }
    }).collect()
}

/// One row per group, in group order; missing datasets read as zero.
pub fn summary_rows(datasets: &DatasetMap, groups: &[SummaryGroup]) -> Vec<SummaryRow> {
    let empty = PropertySet::default();
    groups.iter().map(|g| {
        let props = datasets.get(&g.dataset).unwrap_or(&empty);
        SummaryRow {
            group:    g.label.clone(),
            used_gb:  bytes_to_gb(props.bytes(USED)),
            avail_gb: bytes_to_gb(props.bytes(AVAIL)),
        }
    }).collect()
}

/// Machine-readable snapshot of both views for `--json`.
pub fn snapshot_json(details: &[DetailRow], summary: &[SummaryRow]) -> Value {
    json!({
        "zfsstat_version": env!("CARGO_PKG_VERSION"),
        "timestamp":       chrono::Local::now().to_rfc3339(),
        "datasets":        details,
        "summary":         summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::zfs::parse_zfs_lines;

    fn pool_a() -> DatasetMap {
        parse_zfs_lines(&[
            "pool/a\tquota\t0\t-",
            "pool/a\tused\t1073741824\t-",
            "pool/a\tavail\t2147483648\t-",
            "pool/a\tmountpoint\t/mnt/a\t-",
            "pool/a\ttype\tfilesystem\t-",
        ])
    }

    #[test]
    fn detail_row_for_unlimited_filesystem() {
        let rows = detail_rows(&pool_a());
        assert_eq!(rows, vec![DetailRow {
            name:       "pool/a".into(),
            quota_gb:   None,
            used_gb:    1.0,
            avail_gb:   2.0,
            mountpoint: "/mnt/a".into(),
            kind:       "filesystem".into(),
        }]);
        assert_eq!(rows[0].quota_label(), "Unlimited");
    }

    #[test]
    fn non_zero_quota_is_scaled() {
        let map = parse_zfs_lines(&["tank/home\tquota\t5368709120\tlocal"]);
        let rows = detail_rows(&map);
        assert_eq!(rows[0].quota_gb, Some(5.0));
        assert_eq!(rows[0].quota_label(), "5.0");
    }

    #[test]
    fn missing_properties_fall_back() {
        let map = parse_zfs_lines(&["tank/vol\tused\t1610612736\t-"]);
        let row = &detail_rows(&map)[0];
        assert_eq!(row.quota_label(), UNLIMITED);
        assert_eq!(row.used_gb, 1.5);
        assert_eq!(row.avail_gb, 0.0);
        assert_eq!(row.mountpoint, "-");
        assert_eq!(row.kind, "-");
    }

    #[test]
    fn detail_rows_follow_map_order() {
        let map = parse_zfs_lines(&[
            "z\tused\t0\t-",
            "a\tused\t0\t-",
            "m\tused\t0\t-",
        ]);
        let names: Vec<String> = detail_rows(&map).into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn summary_of_empty_map_has_three_zero_rows() {
        let rows = summary_rows(&DatasetMap::new(), &SummaryGroup::defaults());
        assert_eq!(rows, vec![
            SummaryRow { group: "ROOT".into(),       used_gb: 0.0, avail_gb: 0.0 },
            SummaryRow { group: "data".into(),       used_gb: 0.0, avail_gb: 0.0 },
            SummaryRow { group: "var-lib-vz".into(), used_gb: 0.0, avail_gb: 0.0 },
        ]);
    }

    #[test]
    fn summary_reads_named_datasets_only() {
        let map = parse_zfs_lines(&[
            "rpool/data\tused\t1073741824\t-",
            "rpool/data\tavail\t5368709120\t-",
            "rpool/ROOT/pve-1\tused\t1073741824\t-",
            "pool/a\tused\t1073741824\t-",
        ]);
        let rows = summary_rows(&map, &SummaryGroup::defaults());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], SummaryRow { group: "ROOT".into(), used_gb: 0.0, avail_gb: 0.0 });
        assert_eq!(rows[1], SummaryRow { group: "data".into(), used_gb: 1.0, avail_gb: 5.0 });
        assert_eq!(rows[2].group, "var-lib-vz");
    }

    #[test]
    fn summary_uses_configured_groups() {
        let groups = vec![SummaryGroup::new("home", "pool/a")];
        let rows = summary_rows(&pool_a(), &groups);
        assert_eq!(rows, vec![SummaryRow { group: "home".into(), used_gb: 1.0, avail_gb: 2.0 }]);
    }

    #[test]
    fn snapshot_json_shape() {
        let details = detail_rows(&pool_a());
        let summary = summary_rows(&pool_a(), &SummaryGroup::defaults());
        let v = snapshot_json(&details, &summary);

        assert_eq!(v["datasets"][0]["name"], "pool/a");
        assert!(v["datasets"][0]["quota_gb"].is_null());
        assert_eq!(v["datasets"][0]["used_gb"], 1.0);
        assert_eq!(v["datasets"][0]["type"], "filesystem");
        assert_eq!(v["summary"].as_array().map(Vec::len), Some(3));
        assert_eq!(v["summary"][0]["group"], "ROOT");
        assert!(v["timestamp"].is_string());
    }
}
