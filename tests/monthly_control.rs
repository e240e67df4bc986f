use std::collections::BTreeSet;

use chrono::NaiveDate;
use sgot_tax_rules::{
    config::{FallbackDueDatePolicy, SgotConfig},
    entities::{company, CompetencePeriod, DisplayStatus, TaxCalendarExport, TaxType},
    ext::standard_taxes::{standard_catalog, DAS, DCTF_WEB, FGTS, ISS_RETIDO},
    rules::{aggregate, classify, DueDateResolver, TaxCalendarStore},
    util::SgotControlUtil,
};

const CALENDAR_JSON: &str = r#"[
    {"taxType": "DAS", "dueDay": 20, "description": "Simples Nacional"},
    {"taxType": "FGTS", "dueDay": 7, "description": "FGTS Digital"}
]"#;

const CALENDAR_CSV: &str = "tax_type,due_day,description\nDAS,20,Simples Nacional\nFGTS,7,FGTS Digital\n";

const OBLIGATIONS_CSV: &str = "\
id,company_id,tax_type,reference_month,due_date,amount,status,has_file,not_applicable_reason
o1,acme,DAS,2024-12,2025-01-20,\"1.000,00\",PAID,true,
o2,acme,DAS,2025-01,2025-02-20,\"1.250,00\",SUBMITTED,true,
o3,acme,ISS_RETIDO,2025-01,2025-02-10,300.00,PENDING,false,
o4,beta,DAS,2025-01,2025-02-20,90.00,PAID,false,
o5,beta,FGTS,2025-01,2025-02-07,,NOT_APPLICABLE,false,Sem funcionários
";

const PROFILES_CSV: &str = "\
company_id,expected_taxes
acme,\"[\"\"DAS\"\", \"\"ISS_RETIDO\"\", \"\"FGTS\"\"]\"
beta,\"[\"\"DAS\"\", \"\"FGTS\"\"]\"
";

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn monthly_control_from_json_calendar() {
    init_tracing();
    let util = SgotControlUtil::default();
    let period: CompetencePeriod = "01/2025".parse().unwrap();
    let (control, matrix_csv, report) = util
        .from_string(
            TaxCalendarExport::Json(CALENDAR_JSON),
            OBLIGATIONS_CSV,
            PROFILES_CSV,
            period,
            ymd(2025, 2, 15),
        )
        .unwrap();

    // Calendar keeps the catalog entries nobody configured.
    assert_eq!(control.calendar.len(), 4);
    assert_eq!(control.calendar.due_day(&ISS_RETIDO), None);
    assert_eq!(control.calendar.due_day(&DCTF_WEB), None);

    let acme = company("acme");
    let beta = company("beta");
    assert_eq!(control.matrix.cell(&acme, &DAS), Some(DisplayStatus::Posted));
    assert_eq!(control.matrix.cell(&acme, &ISS_RETIDO), Some(DisplayStatus::Pending));
    assert_eq!(control.matrix.cell(&acme, &FGTS), Some(DisplayStatus::Missing));
    assert_eq!(control.matrix.cell(&acme, &DCTF_WEB), Some(DisplayStatus::Unconfigured));
    assert_eq!(control.matrix.cell(&beta, &FGTS), Some(DisplayStatus::NotApplicable));

    let acme_summary = &control.matrix.rows[0].summary;
    assert_eq!(acme_summary.posted, 1);
    assert_eq!(acme_summary.pending, 1);
    assert_eq!(acme_summary.missing_taxes, vec![FGTS.clone()]);
    assert!((acme_summary.completion_rate - 1.0 / 3.0).abs() < 1e-9);

    assert_eq!(control.overview.companies, 2);
    assert_eq!(control.overview.fully_compliant, 1);
    // ISS_RETIDO was due 2025-02-10.
    assert_eq!(control.overview.overdue, 1);

    // Missing FGTS for acme would be due on the configured 7th of February.
    assert_eq!(control.planned.len(), 1);
    assert_eq!(control.planned[0].company_id, acme);
    assert_eq!(control.planned[0].due_date, ymd(2025, 2, 7));

    let das_variance = control
        .variances
        .iter()
        .find(|v| v.tax_type == *DAS)
        .unwrap();
    assert_eq!(das_variance.previous_total, Some(1000.0));
    assert!((das_variance.current_total - 1340.0).abs() < 1e-9);

    assert!(matrix_csv.starts_with("Empresa,DAS,ISS_RETIDO,FGTS,DCTFWeb,Concluído (%)"));
    assert!(report.contains("Controle mensal 01/2025"));
    assert!(report.contains("A criar:"));
}

#[test]
fn csv_and_json_calendars_agree() {
    let util = SgotControlUtil::default();
    let period: CompetencePeriod = "01/2025".parse().unwrap();
    let today = ymd(2025, 2, 1);
    let (from_json, _, _) = util
        .from_string(
            TaxCalendarExport::Json(CALENDAR_JSON),
            OBLIGATIONS_CSV,
            PROFILES_CSV,
            period,
            today,
        )
        .unwrap();
    let (from_csv, _, _) = util
        .from_string(
            TaxCalendarExport::Csv(CALENDAR_CSV),
            OBLIGATIONS_CSV,
            PROFILES_CSV,
            period,
            today,
        )
        .unwrap();
    assert_eq!(from_json.calendar, from_csv.calendar);
    assert_eq!(from_json.overview, from_csv.overview);
}

#[test]
fn malformed_obligations_fail_the_run() {
    let util = SgotControlUtil::default();
    let broken = "id,company_id,tax_type,reference_month,due_date,amount,status,has_file,not_applicable_reason\n\
                  o1,acme,DAS,janeiro,2025-02-20,,PAID,true,\n";
    let result = util.from_string(
        TaxCalendarExport::Csv(CALENDAR_CSV),
        broken,
        PROFILES_CSV,
        "01/2025".parse().unwrap(),
        ymd(2025, 2, 1),
    );
    assert!(result.is_err());
}

#[test]
fn calendar_due_days_outside_the_month_fail_the_run() {
    let util = SgotControlUtil::default();
    for calendar in [
        TaxCalendarExport::Csv("tax_type,due_day,description\nDAS,45,x\n"),
        TaxCalendarExport::Json(r#"[{"taxType": "DAS", "dueDay": 0}]"#),
    ] {
        let result = util.from_string(
            calendar,
            OBLIGATIONS_CSV,
            PROFILES_CSV,
            "01/2025".parse().unwrap(),
            ymd(2025, 2, 1),
        );
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn monthly_control_from_files() {
    init_tracing();
    let dir = std::env::temp_dir().join(format!("sgot-tax-rules-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let calendar = dir.join("tax-calendar.json");
    let obligations = dir.join("obligations.csv");
    let profiles = dir.join("profiles.csv");
    tokio::fs::write(&calendar, CALENDAR_JSON).await.unwrap();
    tokio::fs::write(&obligations, OBLIGATIONS_CSV).await.unwrap();
    tokio::fs::write(&profiles, PROFILES_CSV).await.unwrap();

    let util = SgotControlUtil::default();
    let (control, _, _) = util
        .from_file(
            &calendar,
            &obligations,
            &profiles,
            "01/2025".parse().unwrap(),
            ymd(2025, 2, 15),
        )
        .await
        .unwrap();
    assert_eq!(control.calendar.due_day(&DAS), Some(20));
    assert_eq!(control.overview.companies, 2);

    let missing = util
        .from_file(
            &dir.join("nope.json"),
            &obligations,
            &profiles,
            "01/2025".parse().unwrap(),
            ymd(2025, 2, 15),
        )
        .await;
    assert!(missing.is_err());

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[test]
fn store_resolver_and_aggregator_compose() {
    let store = TaxCalendarStore::new(standard_catalog());
    store.save(&DAS, 31, "Simples Nacional").unwrap();
    let calendar = store.load().unwrap();

    let resolver = DueDateResolver::default();
    let period = CompetencePeriod::new(1, 2024).unwrap();
    assert_eq!(
        resolver.resolve_for(&period, &DAS, &calendar).unwrap(),
        ymd(2024, 2, 29)
    );

    let strict = DueDateResolver::new(&SgotConfig {
        due_date_policy: FallbackDueDatePolicy::Reject,
        ..SgotConfig::default()
    });
    let old = CompetencePeriod::new(6, 2019).unwrap();
    assert!(strict.resolve_for(&old, &DAS, &calendar).is_err());
    assert_eq!(
        resolver.resolve_for(&old, &DAS, &calendar).unwrap(),
        ymd(2019, 7, 31)
    );

    let expected: BTreeSet<TaxType> = BTreeSet::new();
    assert_eq!(classify(None, &expected, &DAS), DisplayStatus::Unconfigured);
    assert_eq!(aggregate(&company("x"), &[], &expected).completion_rate, 0.0);
}
