use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.join("home"))
        .env_remove("EXPENSE_TRACKER_FILE")
        .current_dir(dir);
    cmd
}

fn add(dir: &Path, date: &str, amount: &str, category: &str) {
    expenses(dir)
        .args(["add", date, amount, category])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));
}

fn seed(dir: &Path) {
    add(dir, "2024-01-01", "50", "Food");
    add(dir, "2024-01-02", "20", "Transport");
    add(dir, "2024-01-03", "30", "Groceries");
}

#[test]
fn add_list_and_total() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-02"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("3 expenses, total $100.00"));

    expenses(temp.path())
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $100.00"));

    let stored = fs::read_to_string(temp.path().join("home/data/expenses.csv")).unwrap();
    assert_eq!(stored.lines().count(), 3);
}

#[test]
fn empty_ledger_lists_nothing() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to display."));
}

#[test]
fn invalid_expense_is_rejected() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["add", "2024-01-01", "-5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount cannot be negative"));

    expenses(temp.path())
        .args(["add", "2024-01-01", "5", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category cannot be empty"));

    expenses(temp.path())
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn delete_by_index() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Transport"));

    expenses(temp.path())
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    expenses(temp.path())
        .args(["delete", "-1"])
        .assert()
        .failure();

    expenses(temp.path())
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$80.00"));
}

#[test]
fn search_and_reports() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .args(["search", "amount", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Expense [Date: 2024-01-02, Amount: $20.00, Category: Transport]",
        ))
        .stdout(predicate::str::contains("Food").not());

    expenses(temp.path())
        .args(["search", "category", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found in category 'Rent'."));

    expenses(temp.path())
        .args(["report", "category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total expenses for category 'Food': $50.00",
        ));

    expenses(temp.path())
        .args(["report", "range", "2024-01-01", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("Groceries").not());

    expenses(temp.path())
        .args(["report", "range", "2025-01-01", "2025-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No expenses found in the specified date range.",
        ));
}

#[test]
fn save_and_load_named_files() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .args(["save", "backup.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 3 expenses to backup.csv"));
    assert!(temp.path().join("backup.csv").exists());

    fs::write(
        temp.path().join("import.txt"),
        "2024-02-01,10,Books\n2024-02-02,oops,Books\n2024-02-03,12.5,Music\n2024-02-04,1,Tea\n",
    )
    .unwrap();

    expenses(temp.path())
        .args(["load", "import.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 expenses from import.txt"))
        .stderr(predicate::str::contains("Skipping line 2"));

    expenses(temp.path())
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$23.50"));
}

#[test]
fn load_rejects_bad_names_and_missing_files() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["load", "notes.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filename"));

    expenses(temp.path())
        .args(["load", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: missing.csv"));
}

#[test]
fn audit_log_records_mutations() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    expenses(temp.path()).args(["delete", "0"]).assert().success();

    let log = fs::read_to_string(temp.path().join("home/audit.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("\"operation\":\"add\""));
    assert!(lines[3].contains("\"operation\":\"delete\""));
}

#[test]
fn working_file_with_bad_bytes_still_usable() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("home/data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("expenses.csv"),
        b"2024-01-01,50,Food\n2024-01-02,20,Caf\xe9\n2024-01-03,30,Groceries\n",
    )
    .unwrap();

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 expenses, total $80.00"))
        .stderr(predicate::str::contains("Skipping line 2"));

    add(temp.path(), "2024-01-05", "5", "Tea");

    expenses(temp.path())
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $85.00"));
}

#[test]
fn read_only_commands_leave_audit_log_alone() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("home/data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("expenses.csv"), "2024-01-01,50,Food\nbroken\n").unwrap();

    for _ in 0..3 {
        expenses(temp.path()).arg("list").assert().success();
    }
    expenses(temp.path()).arg("total").assert().success();
    assert!(!temp.path().join("home/audit.log").exists());

    add(temp.path(), "2024-01-02", "5", "Tea");

    let log = fs::read_to_string(temp.path().join("home/audit.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"operation\":\"skip_line\""));
    assert!(lines[1].contains("\"operation\":\"add\""));
}

#[test]
fn audit_command_shows_recent_entries() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit log at"));

    seed(temp.path());
    expenses(temp.path()).args(["delete", "0"]).assert().success();

    expenses(temp.path())
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE index 0"))
        .stdout(predicate::str::contains("ADD").not());

    expenses(temp.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD index 2"));
}
