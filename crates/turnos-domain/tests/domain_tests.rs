//! Unit tests for turnos-domain

use chrono::NaiveDate;
use turnos_domain::errors::*;
use turnos_domain::value_objects::*;
use turnos_domain::{Cliente, RequestContext, Turno};

fn cliente() -> Cliente {
    Cliente::new("c-1", "Ivan", "123456789", PreferenciaHoraria::Tarde)
}

mod time_of_day_tests {
    use super::*;

    #[test]
    fn test_parse_25_00_fails_with_range_error() {
        let result = TimeOfDay::parse("25:00");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("hora inválida: 25:00"));
    }

    #[test]
    fn test_parse_does_not_require_fixed_width() {
        let t = TimeOfDay::parse("10:5").unwrap();
        assert_eq!(t.hour, 10);
        assert_eq!(t.minute, 5);
        // format is fixed width even though parse is not
        assert_eq!(t.to_string(), "10:05");
    }

    #[test]
    fn test_sorting_is_chronological() {
        let mut times: Vec<TimeOfDay> = ["18:00", "9:45", "09:05", "13:30"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        times.sort();
        let formatted: Vec<String> = times.iter().map(ToString::to_string).collect();
        assert_eq!(formatted, vec!["09:05", "09:45", "13:30", "18:00"]);
    }
}

mod turno_tests {
    use super::*;

    #[test]
    fn test_turno_validation_order() {
        let fecha = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();

        let mut turno = Turno::new("t-1", fecha, TimeOfDay::new(10, 30).unwrap(), cliente());
        assert!(turno.validate().is_ok());

        turno.cliente.nombre.clear();
        assert!(matches!(
            turno.validate(),
            Err(DomainError::InvalidClient(inner)) if *inner == DomainError::InvalidFields
        ));

        turno.hora = TimeOfDay { hour: 30, minute: 0 };
        assert_eq!(turno.validate(), Err(DomainError::InvalidTime));

        turno.fecha = None;
        assert_eq!(turno.validate(), Err(DomainError::ZeroDate));
    }

    #[test]
    fn test_turno_json_shape() {
        let fecha = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let turno = Turno::new("t-1", fecha, TimeOfDay::new(10, 30).unwrap(), cliente());
        let json = serde_json::to_value(&turno).unwrap();
        assert_eq!(json["hora"], "10:30");
        assert_eq!(json["cliente"]["preferencia_horaria"], "Tarde");
    }
}

mod context_tests {
    use super::*;

    #[tokio::test]
    async fn test_cancellation_visible_across_tasks() {
        let ctx = RequestContext::new();
        let worker_ctx = ctx.clone();

        let handle = tokio::spawn(async move {
            worker_ctx.token().cancelled().await;
            worker_ctx.check()
        });

        ctx.cancel();
        let result = handle.await.unwrap();
        assert_eq!(result, Err(DomainError::Cancelled));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Cancelled);
    }
}
