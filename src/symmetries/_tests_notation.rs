#[cfg(test)]
mod _tests_notation {
    use super::super::notation::{parse_operation, to_text, to_text_with_moments, NotationLabels};
    use super::super::symmetry_operations::SymmetryOperation;
    use crate::catalogue::test_fixtures::excerpt_catalogue;
    use crate::error::SymmetryError;
    use crate::interfaces::{PointOperatorFamily, TimeReversal};
    use nalgebra::{Matrix3, Vector3};

    fn labels() -> NotationLabels {
        NotationLabels::default()
    }

    fn round_trip(text: &str) -> String {
        to_text(&parse_operation(text, &labels()).unwrap(), &labels())
    }

    // ==================== Serialization ====================

    #[test]
    fn test_to_text_basic() {
        let op = SymmetryOperation::new(
            Matrix3::new(1, -1, 0, 0, -1, 0, 0, 0, -1),
            Vector3::new(1, 0, 0),
            2,
            TimeReversal::Even,
        );
        assert_eq!(to_text(&op, &labels()), "x-y+1/2,-y,-z,+1");
        assert_eq!(to_text(&SymmetryOperation::identity(), &labels()), "x,y,z,+1");
        assert_eq!(to_text(&SymmetryOperation::time_inversion(), &labels()), "x,y,z,-1");
    }

    #[test]
    fn test_to_text_reduces_but_does_not_wrap() {
        let op = SymmetryOperation::new(Matrix3::identity(), Vector3::new(2, -6, 12), 4, TimeReversal::Even);
        assert_eq!(to_text(&op, &labels()), "x+1/2,y-3/2,z+3,+1");
    }

    #[test]
    fn test_to_text_other_coefficients_and_zero_rows() {
        let op = SymmetryOperation::new(
            Matrix3::new(2, 0, 0, 0, 0, 0, 0, 0, 1),
            Vector3::zeros(),
            1,
            TimeReversal::Even,
        );
        assert_eq!(to_text(&op, &labels()), "2x,0,z,+1");
    }

    #[test]
    fn test_sign_inferred_when_first_entry_is_zero() {
        let catalogue = excerpt_catalogue();
        let table = catalogue.point_operators(PointOperatorFamily::Hexagonal);
        let rotation = table.matrix(2).unwrap();
        let op = SymmetryOperation::new(rotation, Vector3::zeros(), 1, TimeReversal::Odd);
        assert_eq!(to_text(&op, &labels()), "-y,x-y,z,-1");
    }

    #[test]
    fn test_to_text_with_moments() {
        let op = SymmetryOperation::new(
            Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1),
            Vector3::new(0, 0, 1),
            2,
            TimeReversal::Odd,
        );
        assert_eq!(to_text_with_moments(&op, &labels()), "-x,-y,z+1/2,mx,my,-mz,-1");
    }

    #[test]
    fn test_custom_labels() {
        let custom = NotationLabels::new(["a", "b", "c"], ["ma", "mb", "mc"]);
        let op = parse_operation("-b,a-b,c,+1", &custom).unwrap();
        assert_eq!(op.rotation, Matrix3::new(0, -1, 0, 1, -1, 0, 0, 0, 1));
        assert_eq!(to_text_with_moments(&op, &custom), "-b,a-b,c,-mb,ma-mb,mc,+1");
    }

    // ==================== Round trip ====================

    #[test]
    fn test_round_trip_canonical_strings() {
        for text in [
            "x,y,z,+1",
            "-y,x-y+1/2,z,+1",
            "x-y+1/2,-y,-z,+1",
            "-x,-y,-z,-1",
            "y,x,-z+1/4,-1",
            "-x+y,-x,z+2/3,+1",
        ] {
            assert_eq!(round_trip(text), text);
        }
    }

    #[test]
    fn test_round_trip_canonicalizes() {
        assert_eq!(round_trip(" x , y , z "), "x,y,z,+1");
        assert_eq!(round_trip("-y+x,y,z,1"), "x-y,y,z,+1");
        assert_eq!(round_trip("x+1/2-1/4,y,z+2/4,-1"), "x+1/4,y,z+1/2,-1");
        assert_eq!(round_trip("2*x,y,z"), "2x,y,z,+1");
    }

    #[test]
    fn test_round_trip_catalogue_operations() {
        let catalogue = excerpt_catalogue();
        for record in catalogue.iter() {
            let operations = catalogue
                .full_operators(
                    record.bns_label.part_1,
                    record.bns_label.part_2,
                    record.point_operator_family(),
                )
                .unwrap();
            for op in operations {
                let text = to_text(&op, &labels());
                let parsed = parse_operation(&text, &labels()).unwrap();
                assert_eq!(parsed.normalized(), op.normalized(), "round trip of {}", text);

                let with_moments = to_text_with_moments(&op, &labels());
                let parsed = parse_operation(&with_moments, &labels()).unwrap();
                assert_eq!(parsed.magnetic_rotation, op.magnetic_rotation);
            }
        }
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_moment_rows() {
        let op = parse_operation("-x,-y,z,mx,my,-mz", &labels()).unwrap();
        assert_eq!(op.magnetic_rotation, Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1));
        assert_eq!(op.time_reversal(), TimeReversal::Odd);
    }

    #[test]
    fn test_parse_errors() {
        for text in ["x,y", "x,y,z,+2", "x,y,q", "x,y,z+1/0", "x,y,z,mx,my", "x,y,-,+1", "x,y,z,mx,my,mz+1/2"] {
            assert!(
                matches!(parse_operation(text, &labels()), Err(SymmetryError::Notation { .. })),
                "`{}` should not parse",
                text
            );
        }
    }
}
