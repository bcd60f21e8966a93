//! Unit tests for subway-network.

#[cfg(test)]
mod helpers {
    use subway_core::StationId;

    use crate::Network;

    /// Southern Seoul fixture:
    ///
    /// ```text
    /// Gyodae ──10── Gangnam          (Line 2)
    ///                  │10
    ///                Yangjae          (Shinbundang)
    ///                  │3
    /// Gyodae ──2── Nambu Terminal     (Line 3)
    /// ```
    pub fn seoul() -> (Network, [StationId; 4]) {
        let mut net = Network::new();
        let gyodae  = net.add_station("Gyodae").unwrap();
        let gangnam = net.add_station("Gangnam").unwrap();
        let yangjae = net.add_station("Yangjae").unwrap();
        let nambu   = net.add_station("Nambu Terminal").unwrap();

        net.create_line("Line 2", "green", gyodae, gangnam, 10).unwrap();
        net.create_line("Shinbundang", "red", gangnam, yangjae, 10).unwrap();
        let line3 = net.create_line("Line 3", "orange", gyodae, nambu, 2).unwrap();
        net.add_segment(line3, nambu, yangjae, 3).unwrap();

        (net, [gyodae, gangnam, yangjae, nambu])
    }

    pub const SEOUL_CSV: &str = "\
line,color,up_station,down_station,distance\n\
Line 2,green,Gyodae,Gangnam,10\n\
Shinbundang,red,Gangnam,Yangjae,10\n\
Line 3,orange,Gyodae,Nambu Terminal,2\n\
Line 3,orange,Nambu Terminal,Yangjae,3\n\
";
}

// ── Stations ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stations {
    use subway_core::StationId;

    use crate::{Network, NetworkError};

    #[test]
    fn sequential_ids() {
        let mut net = Network::new();
        assert_eq!(net.add_station("Seolleung").unwrap(), StationId(0));
        assert_eq!(net.add_station("Samseong").unwrap(), StationId(1));
        assert_eq!(net.station(StationId(1)).unwrap().name(), "Samseong");
        assert_eq!(net.stations().count(), 2);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut net = Network::new();
        net.add_station("Seolleung").unwrap();
        assert!(matches!(
            net.add_station("Seolleung"),
            Err(NetworkError::DuplicateStationName(_))
        ));
    }

    #[test]
    fn unknown_station() {
        let net = Network::new();
        assert!(matches!(net.station(StationId(9)), Err(NetworkError::StationNotFound(_))));
        assert!(net.station_by_name("Nowhere").is_none());
    }

    #[test]
    fn station_in_use_cannot_be_removed() {
        let (mut net, [gyodae, ..]) = super::helpers::seoul();
        assert!(matches!(
            net.remove_station(gyodae),
            Err(NetworkError::StationInUse { .. })
        ));
    }

    #[test]
    fn unused_station_removed() {
        let mut net = Network::new();
        let id = net.add_station("Jamsil").unwrap();
        assert_eq!(net.remove_station(id).unwrap().name(), "Jamsil");
        assert!(net.station(id).is_err());
    }
}

// ── Lines ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lines {
    use subway_core::{CoreError, LineId};
    use subway_line::LineError;

    use crate::{Network, NetworkError};

    #[test]
    fn create_line_with_first_segment() {
        let (net, [gyodae, gangnam, ..]) = super::helpers::seoul();
        let line = net.line(LineId(0)).unwrap();
        assert_eq!(line.name(), "Line 2");
        assert_eq!(line.stations(), vec![gyodae, gangnam]);
        assert_eq!(net.line_count(), 3);
    }

    #[test]
    fn rejected_first_segment_stores_nothing() {
        let mut net = Network::new();
        let a = net.add_station("Seolleung").unwrap();
        let err = net.create_line("Line 2", "green", a, a, 10).unwrap_err();
        assert!(matches!(err, NetworkError::Line(LineError::InvalidSegment { .. })));
        assert_eq!(net.line_count(), 0);

        // The failed attempt did not consume an ID.
        let b = net.add_station("Samseong").unwrap();
        assert_eq!(net.create_line("Line 2", "green", a, b, 10).unwrap(), LineId(0));
    }

    #[test]
    fn zero_distance_rejected() {
        let mut net = Network::new();
        let a = net.add_station("Seolleung").unwrap();
        let b = net.add_station("Samseong").unwrap();
        let err = net.create_line("Line 2", "green", a, b, 0).unwrap_err();
        assert!(matches!(err, NetworkError::Core(CoreError::ZeroDistance)));
    }

    #[test]
    fn update_and_delete() {
        let (mut net, _) = super::helpers::seoul();
        net.update_line(LineId(1), "Shinbundang Line", "crimson").unwrap();
        assert_eq!(net.line(LineId(1)).unwrap().color(), "crimson");

        let removed = net.delete_line(LineId(1)).unwrap();
        assert_eq!(removed.name(), "Shinbundang Line");
        assert!(matches!(net.line(LineId(1)), Err(NetworkError::LineNotFound(_))));
        assert!(matches!(net.delete_line(LineId(1)), Err(NetworkError::LineNotFound(_))));
    }

    #[test]
    fn segment_operations_delegate_to_chain() {
        let mut net = Network::new();
        let seolleung = net.add_station("Seolleung").unwrap();
        let samseong  = net.add_station("Samseong").unwrap();
        let sincheon  = net.add_station("Sincheon").unwrap();
        let line = net.create_line("Line 2", "green", seolleung, samseong, 10).unwrap();

        net.add_segment(line, samseong, sincheon, 10).unwrap();
        assert_eq!(net.line(line).unwrap().stations(), vec![seolleung, samseong, sincheon]);

        let err = net.add_segment(line, sincheon, seolleung, 5).unwrap_err();
        assert!(matches!(err, NetworkError::Line(LineError::DuplicateSegment { .. })));

        net.remove_segment(line, sincheon).unwrap();
        assert_eq!(net.line(line).unwrap().stations(), vec![seolleung, samseong]);
    }

    #[test]
    fn segment_on_unknown_line() {
        let mut net = Network::new();
        let a = net.add_station("Seolleung").unwrap();
        let b = net.add_station("Samseong").unwrap();
        assert!(matches!(
            net.add_segment(LineId(5), a, b, 1),
            Err(NetworkError::LineNotFound(_))
        ));
    }
}

// ── Path queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use subway_path::{PathError, ValidationError};

    use crate::{Network, NetworkError};

    #[test]
    fn shortest_route_resolves_names() {
        let (net, [gyodae, _, yangjae, _]) = super::helpers::seoul();
        let route = net.shortest_path(gyodae, yangjae).unwrap();
        assert_eq!(route.station_names(), vec!["Gyodae", "Nambu Terminal", "Yangjae"]);
        assert_eq!(route.distance, 5);
    }

    #[test]
    fn station_off_every_line() {
        let (mut net, [gyodae, ..]) = super::helpers::seoul();
        let jamsil = net.add_station("Jamsil").unwrap();
        let err = net.shortest_path(gyodae, jamsil).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Path(PathError::Validation(ValidationError::DestinationNotOnLine(_)))
        ));
    }

    #[test]
    fn no_lines_at_all() {
        let mut net = Network::new();
        let a = net.add_station("Seolleung").unwrap();
        let b = net.add_station("Samseong").unwrap();
        let err = net.shortest_path(a, b).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Path(PathError::Validation(ValidationError::NoSegments))
        ));
    }

    #[test]
    fn disconnected_lines() {
        let mut net = Network::new();
        let a = net.add_station("Jeongwang").unwrap();
        let b = net.add_station("Oido").unwrap();
        let c = net.add_station("Gyodae").unwrap();
        let d = net.add_station("Gangnam").unwrap();
        net.create_line("Line 4", "blue", a, b, 10).unwrap();
        net.create_line("Line 2", "green", c, d, 10).unwrap();

        let err = net.shortest_path(a, d).unwrap_err();
        assert!(matches!(err, NetworkError::Path(PathError::NotFound { .. })));
    }

    #[test]
    fn deleted_line_no_longer_routes() {
        let (mut net, [gyodae, _, yangjae, _]) = super::helpers::seoul();
        // Drop Line 3; the only route left is via Gangnam.
        net.delete_line(subway_core::LineId(2)).unwrap();
        let route = net.shortest_path(gyodae, yangjae).unwrap();
        assert_eq!(route.station_names(), vec!["Gyodae", "Gangnam", "Yangjae"]);
        assert_eq!(route.distance, 20);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use subway_line::LineError;

    use crate::{load_network_csv, load_network_reader, NetworkError};

    #[test]
    fn loads_fixture() {
        let net = load_network_reader(Cursor::new(super::helpers::SEOUL_CSV)).unwrap();
        assert_eq!(net.line_count(), 3);
        assert_eq!(net.stations().count(), 4);

        let gyodae  = net.station_by_name("Gyodae").unwrap().id();
        let yangjae = net.station_by_name("Yangjae").unwrap().id();
        assert_eq!(net.shortest_path(gyodae, yangjae).unwrap().distance, 5);
    }

    #[test]
    fn later_rows_extend_existing_line() {
        let net = load_network_reader(Cursor::new(super::helpers::SEOUL_CSV)).unwrap();
        let line3 = net.lines().find(|l| l.name() == "Line 3").unwrap();
        assert_eq!(line3.segments().len(), 2);
        assert_eq!(line3.color(), "orange");
    }

    #[test]
    fn topology_violation_surfaces() {
        let csv = "\
line,color,up_station,down_station,distance\n\
Line 1,blue,A,B,1\n\
Line 1,blue,C,D,1\n\
";
        let err = load_network_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, NetworkError::Line(LineError::DisconnectedSegment { .. })));
    }

    #[test]
    fn malformed_distance() {
        let csv = "\
line,color,up_station,down_station,distance\n\
Line 1,blue,A,B,far\n\
";
        assert!(matches!(
            load_network_reader(Cursor::new(csv)),
            Err(NetworkError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(super::helpers::SEOUL_CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let net = load_network_csv(file.path()).unwrap();
        assert_eq!(net.line_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_network_csv(std::path::Path::new("/nonexistent/network.csv"));
        assert!(matches!(result, Err(NetworkError::Io(_))));
    }
}
