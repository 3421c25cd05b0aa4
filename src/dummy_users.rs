use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};

const OUTPUT_FILE_NAME: &str = "dummy_users.xlsx";
const SHEET_NAME: &str = "Users";

const HEADERS: [&str; 8] = [
    "pk",
    "id",
    "name",
    "email",
    "password",
    "created_at",
    "onboarding_complete",
    "onboarding_data",
];

/// One fabricated user row. The tool only ever builds the four literals
/// below; nothing is read, validated, or mutated at runtime.
struct UserRecord {
    pk: u32,
    id: &'static str,
    name: &'static str,
    email: &'static str,
    password: &'static str,
    created_at: DateTime<Utc>,
    onboarding_complete: bool,
    onboarding_data: &'static str,
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn dummy_users() -> [UserRecord; 4] {
    [
        UserRecord {
            pk: 1,
            id: "1",
            name: "John Doe",
            email: "john@example.com",
            password: "Password123",
            created_at: ts(2023, 1, 1, 10, 0),
            onboarding_complete: true,
            onboarding_data: r#"{"step1":true,"step2":true}"#,
        },
        UserRecord {
            pk: 2,
            id: "2",
            name: "Jane Smith",
            email: "jane@example.com",
            password: "Password456",
            created_at: ts(2023, 2, 15, 12, 30),
            onboarding_complete: false,
            onboarding_data: r#"{"step1":true,"step2":false}"#,
        },
        UserRecord {
            pk: 3,
            id: "3",
            name: "Test User",
            email: "testuser@example.com",
            password: "TestPass789",
            created_at: ts(2023, 3, 10, 9, 15),
            onboarding_complete: true,
            onboarding_data: r#"{"step1":true,"step2":true}"#,
        },
        UserRecord {
            pk: 4,
            id: "4",
            name: "Demo User",
            email: "demo@example.com",
            password: "DemoPass321",
            created_at: ts(2023, 4, 20, 14, 45),
            onboarding_complete: false,
            onboarding_data: r#"{"step1":false,"step2":false}"#,
        },
    ]
}

fn cell_ref(col_1_based: usize, row_1_based: usize) -> String {
    fn col_to_name(mut col: usize) -> String {
        let mut name = String::new();
        while col > 0 {
            let rem = (col - 1) % 26;
            name.push((b'A' + rem as u8) as char);
            col = (col - 1) / 26;
        }
        name.chars().rev().collect()
    }

    format!("{}{}", col_to_name(col_1_based), row_1_based)
}

/// Write `dummy_users.xlsx` into `dir`, overwriting any existing file,
/// and return the output path.
pub fn write_dummy_users(dir: &Path) -> Result<PathBuf> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(SHEET_NAME);

    for (i, header) in HEADERS.iter().enumerate() {
        let addr = cell_ref(i + 1, 1);
        sheet.get_cell_mut(addr.as_str()).set_value_string(*header);
    }

    for (row_idx, user) in dummy_users().iter().enumerate() {
        // 行2起为数据行；pk 写数字、onboarding_complete 写布尔，其余写字符串
        let row = row_idx + 2;

        sheet
            .get_cell_mut(cell_ref(1, row).as_str())
            .set_value_number(user.pk);
        sheet
            .get_cell_mut(cell_ref(2, row).as_str())
            .set_value_string(user.id);
        sheet
            .get_cell_mut(cell_ref(3, row).as_str())
            .set_value_string(user.name);
        sheet
            .get_cell_mut(cell_ref(4, row).as_str())
            .set_value_string(user.email);
        sheet
            .get_cell_mut(cell_ref(5, row).as_str())
            .set_value_string(user.password);
        sheet
            .get_cell_mut(cell_ref(6, row).as_str())
            .set_value_string(user.created_at.format("%Y-%m-%dT%H:%M:%SZ").to_string());
        sheet
            .get_cell_mut(cell_ref(7, row).as_str())
            .set_value_bool(user.onboarding_complete);
        sheet
            .get_cell_mut(cell_ref(8, row).as_str())
            .set_value_string(user.onboarding_data);
    }

    let output_path = dir.join(OUTPUT_FILE_NAME);
    umya_spreadsheet::writer::xlsx::write(&book, &output_path)
        .with_context(|| format!("无法保存文件: {}", output_path.display()))?;

    Ok(output_path)
}

pub fn run() -> Result<()> {
    write_dummy_users(Path::new("."))?;
    println!("dummy_users.xlsx created.");
    Ok(())
}
