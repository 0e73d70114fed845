//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite covers:
//! - Single hourly and salaried payroll computation
//! - Batches of computations across mixed employment types
//! - Year-to-date summaries over a populated repository
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    PeriodInputs, compute_hourly_payroll, compute_payroll, compute_salaried_payroll,
    summarize_department_year_to_date, summarize_year_to_date,
};
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::models::{Department, Employee, EmployeeStatus, EmploymentType, PayPeriod};
use payroll_engine::repository::Repository;

fn load_config() -> PayrollConfig {
    ConfigLoader::load("./config")
        .expect("Failed to load config")
        .config()
        .clone()
}

fn create_employee(index: usize) -> Employee {
    let employment_type = match index % 4 {
        0 => EmploymentType::FullTime,
        1 => EmploymentType::PartTime,
        2 => EmploymentType::Contract,
        _ => EmploymentType::Intern,
    };
    let hourly = matches!(
        employment_type,
        EmploymentType::PartTime | EmploymentType::Intern
    );
    Employee {
        employee_id: format!("EMP{:04}", index),
        first_name: "Bench".to_string(),
        last_name: "Employee".to_string(),
        email: format!("emp{:04}@example.com", index),
        phone: None,
        date_of_birth: None,
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
        position: None,
        employment_type,
        status: EmployeeStatus::Active,
        department_id: Some("BENCH".to_string()),
        hourly_rate: hourly.then(|| Decimal::new(2475, 2)),
        annual_salary: (!hourly).then(|| Decimal::new(6_500_000, 2)),
    }
}

/// Fortnightly periods starting on the first Monday of 2026.
fn create_periods(count: usize) -> Vec<PayPeriod> {
    let first = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    (0..count as i64)
        .map(|i| {
            let start = first + Duration::days(i * 14);
            PayPeriod::new(start, start + Duration::days(13)).unwrap()
        })
        .collect()
}

fn create_inputs(period: PayPeriod) -> PeriodInputs {
    PeriodInputs::hourly(
        period,
        Decimal::from(76),
        Decimal::new(45, 1),
        Decimal::from(50),
    )
}

/// Benchmark: Single payroll computation per pay basis.
fn bench_single_payroll(c: &mut Criterion) {
    let config = load_config();
    let period = create_periods(1)[0];
    let hourly = create_employee(1);
    let salaried = create_employee(0);

    c.bench_function("hourly_payroll", |b| {
        b.iter(|| {
            compute_hourly_payroll(
                black_box(&hourly),
                Decimal::from(76),
                Decimal::new(45, 1),
                Decimal::from(50),
                &period,
                &config,
            )
        })
    });

    c.bench_function("salaried_payroll", |b| {
        b.iter(|| compute_salaried_payroll(black_box(&salaried), Decimal::ZERO, &period, &config))
    });
}

/// Benchmark: Batches of mixed employees for one pay period.
fn bench_batch(c: &mut Criterion) {
    let config = load_config();
    let inputs = create_inputs(create_periods(1)[0]);

    let mut group = c.benchmark_group("batch_processing");
    for size in [100usize, 1000] {
        let employees: Vec<Employee> = (0..size).map(create_employee).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), &employees, |b, employees| {
            b.iter(|| {
                let payrolls: Vec<_> = employees
                    .iter()
                    .map(|employee| compute_payroll(employee, &inputs, &config))
                    .collect();
                black_box(payrolls)
            })
        });
    }
    group.finish();
}

/// Benchmark: Year-to-date summaries over a full year of stored payrolls.
fn bench_year_to_date(c: &mut Criterion) {
    let config = load_config();
    let dir = tempfile::tempdir().unwrap();
    let mut repository = Repository::open(dir.path());
    repository
        .add_department(Department::new("BENCH", "Benchmarks"))
        .unwrap();

    let employees: Vec<Employee> = (0..8).map(create_employee).collect();
    for employee in &employees {
        repository.add_employee(employee.clone()).unwrap();
    }
    for period in create_periods(26) {
        for employee in &employees {
            let payroll = compute_payroll(employee, &create_inputs(period), &config).unwrap();
            repository.add_payroll(payroll).unwrap();
        }
    }

    c.bench_function("employee_year_to_date", |b| {
        b.iter(|| summarize_year_to_date(&repository, black_box("EMP0001"), 2026))
    });

    c.bench_function("department_year_to_date", |b| {
        b.iter(|| summarize_department_year_to_date(&repository, black_box("BENCH"), 2026))
    });
}

criterion_group!(
    benches,
    bench_single_payroll,
    bench_batch,
    bench_year_to_date,
);
criterion_main!(benches);
