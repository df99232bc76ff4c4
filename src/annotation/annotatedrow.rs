use serde::Serialize;

/// 輸出表格的一列，對應一個取樣點
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRow {
    x: f64,
    y: f64,
    /// 與 `AnnotatedCurve::band_labels()` 同順序
    per_band_y: Vec<Option<f64>>,
    point_label: Option<String>,
}

impl AnnotatedRow {
    pub fn new(x: f64, y: f64, per_band_y: Vec<Option<f64>>, point_label: Option<String>) -> AnnotatedRow {
        AnnotatedRow { x, y, per_band_y, point_label }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn per_band_y(&self) -> &[Option<f64>] {
        &self.per_band_y
    }

    pub fn point_label(&self) -> Option<&str> {
        self.point_label.as_deref()
    }
}

pub const X_COLUMN: &str = "x";
pub const Y_COLUMN: &str = "y";
pub const LABEL_COLUMN: &str = "labels";

/// 完整輸出：區間欄位名稱與依取樣順序排列的各列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedCurve {
    band_labels: Vec<String>,
    rows: Vec<AnnotatedRow>,
}

impl AnnotatedCurve {
    pub fn new(band_labels: Vec<String>, rows: Vec<AnnotatedRow>) -> AnnotatedCurve {
        AnnotatedCurve { band_labels, rows }
    }

    pub fn band_labels(&self) -> &[String] {
        &self.band_labels
    }

    pub fn rows(&self) -> &[AnnotatedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 指定列在指定區間的 y 投影；標籤不存在時為 None
    pub fn band_y(&self, row: usize, band_label: &str) -> Option<f64> {
        let column = self.band_labels.iter().position(|l| l == band_label)?;
        self.rows.get(row)?.per_band_y.get(column).copied().flatten()
    }

    /// 單一區間的完整序列（區間外為 None），供面積圖使用
    pub fn band_series(&self, band_label: &str) -> Option<Vec<Option<f64>>> {
        let column = self.band_labels.iter().position(|l| l == band_label)?;
        Some(self.rows.iter().map(|r| r.per_band_y.get(column).copied().flatten()).collect())
    }

    pub fn labeled_rows(&self) -> impl Iterator<Item = (usize, &AnnotatedRow)> {
        self.rows.iter().enumerate().filter(|(_, r)| r.point_label.is_some())
    }

    /// x, y, <各區間>, labels
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.band_labels.len() + 3);
        names.push(X_COLUMN.to_owned());
        names.push(Y_COLUMN.to_owned());
        names.extend(self.band_labels.iter().cloned());
        names.push(LABEL_COLUMN.to_owned());
        names
    }

    /// 各列轉為字串儲存格，缺值輸出空字串
    pub fn to_records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(row.per_band_y.len() + 3);
                cells.push(row.x.to_string());
                cells.push(row.y.to_string());
                cells.extend(
                    row.per_band_y
                        .iter()
                        .map(|v| v.map(|y| y.to_string()).unwrap_or_default()),
                );
                cells.push(row.point_label.clone().unwrap_or_default());
                cells
            })
            .collect()
    }

    /// RFC 4180 CSV：表頭加各列，每列以 CRLF 結尾
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_csv_line(&mut out, &self.column_names());
        for record in self.to_records() {
            push_csv_line(&mut out, &record);
        }
        out
    }
}

fn push_csv_line(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_field(cell));
    }
    out.push_str("\r\n");
}

/// 含逗號、引號或換行的欄位加上引號，內部引號加倍
fn csv_field(cell: &str) -> String {
    if cell.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> AnnotatedCurve {
        AnnotatedCurve::new(
            vec!["a".to_owned(), "b".to_owned()],
            vec![
                AnnotatedRow::new(1.0, 0.5, vec![Some(0.5), None], Some("50%".to_owned())),
                AnnotatedRow::new(2.0, 0.25, vec![None, Some(0.25)], None),
            ],
        )
    }

    #[test]
    fn band_lookup_by_label() {
        let c = curve();
        assert_eq!(c.band_y(0, "a"), Some(0.5));
        assert_eq!(c.band_y(0, "b"), None);
        assert_eq!(c.band_y(1, "b"), Some(0.25));
        assert_eq!(c.band_y(0, "missing"), None);
        assert_eq!(c.band_y(5, "a"), None);
        assert_eq!(c.band_series("b"), Some(vec![None, Some(0.25)]));
    }

    #[test]
    fn records_render_empty_cells() {
        let c = curve();
        assert_eq!(c.column_names(), vec!["x", "y", "a", "b", "labels"]);
        assert_eq!(
            c.to_records(),
            vec![
                vec!["1", "0.5", "0.5", "", "50%"],
                vec!["2", "0.25", "", "0.25", ""],
            ]
        );
    }

    #[test]
    fn band_series_tolerates_short_rows() {
        let c = AnnotatedCurve::new(
            vec!["a".to_owned(), "b".to_owned()],
            vec![AnnotatedRow::new(1.0, 0.5, vec![Some(0.5)], None)],
        );
        assert_eq!(c.band_series("b"), Some(vec![None]));
        assert_eq!(c.band_y(0, "b"), None);
    }

    #[test]
    fn csv_quotes_labels_with_separators() {
        let c = AnnotatedCurve::new(
            vec!["low,a".to_owned(), "say \"hi\"".to_owned()],
            vec![AnnotatedRow::new(1.0, 0.5, vec![Some(0.5), None], Some("50%".to_owned()))],
        );
        assert_eq!(
            c.to_csv(),
            "x,y,\"low,a\",\"say \"\"hi\"\"\",labels\r\n1,0.5,0.5,,50%\r\n"
        );
    }

    #[test]
    fn csv_leaves_plain_fields_unquoted() {
        assert_eq!(curve().to_csv(), "x,y,a,b,labels\r\n1,0.5,0.5,,50%\r\n2,0.25,,0.25,\r\n");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn labeled_rows_skip_unlabeled() {
        let c = curve();
        let idx: Vec<usize> = c.labeled_rows().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![0]);
    }
}
