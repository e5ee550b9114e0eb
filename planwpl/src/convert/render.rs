use crate::consts::{WPL_HEADER, WPL_LINE_ENDING};
use crate::convert::WaypointRecord;

/// Renders waypoint records as a `QGC WPL 120` document.
///
/// The header line is always present. Every line, including the last one, is terminated by
/// [`WPL_LINE_ENDING`].
pub fn render(records: &[WaypointRecord]) -> String {
    let mut text = String::with_capacity(WPL_HEADER.len() + records.len() * 96);

    text.push_str(WPL_HEADER);
    text.push_str(WPL_LINE_ENDING);
    for record in records {
        text.push_str(&record.to_string());
        text.push_str(WPL_LINE_ENDING);
    }

    text
}

#[cfg(test)]
mod render_tests {
    use super::*;

    use crate::protocol::MavFrame;

    #[test]
    fn header_is_always_present() {
        assert_eq!(render(&[]), "QGC WPL 120\r\n");
    }

    #[test]
    fn records_are_rendered_in_order() {
        let record = |seq: u16| WaypointRecord {
            seq,
            current: seq == 0,
            frame: MavFrame::GlobalRelativeAlt,
            command: 22,
            params: [0.0; 4],
            latitude: 0.0,
            longitude: 0.0,
            altitude: 10.0,
            autocontinue: true,
        };
        let text = render(&[record(0), record(1)]);
        let lines: Vec<&str> = text.split("\r\n").collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "QGC WPL 120");
        assert!(lines[1].starts_with("0\t1\t3\t22\t"));
        assert!(lines[2].starts_with("1\t0\t3\t22\t"));
        assert_eq!(lines[3], "");
        assert_eq!(text, render(&[record(0), record(1)]));
    }
}
