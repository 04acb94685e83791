use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const SAMPLE: &str = "year,data\n1901,-7.67\n1902,-7.86\n1903,-8.29\n1904,-8.31\n1905,-7.73\n1906,-7.46\n";

/// Serves a single canned response and returns the url to request it from
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local address");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line, body.len(), body);
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/climateweb/rest/v1/country/cru/tas/year/CAN.csv", addr)
}

fn write_config(tmp: &TempDir, url: &str) -> PathBuf {
    let path = tmp.path().join("config.toml");
    let log = tmp.path().join("climate_series.log");
    let toml = format!(
        "[general]\nlog_path = {:?}\nlog_level = \"debug\"\nlog_to_stderr = false\n\n[source]\nurl = {:?}\ntimeout_secs = 10\n",
        log.display().to_string(), url);
    fs::write(&path, toml).expect("write config");
    path
}

fn cmd(config: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("climate_series");
    cmd.arg(format!("--config={}", config.display()));
    cmd
}

#[test]
fn prints_first_five_results() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, &serve_once("200 OK", SAMPLE));

    cmd(&config)
        .assert()
        .success()
        .stdout("first five results\n[[1901, -7.67], [1902, -7.86], [1903, -8.29], [1904, -8.31], [1905, -7.73]]\n");

    let log = fs::read_to_string(tmp.path().join("climate_series.log")).unwrap();
    assert!(log.contains("parsed 6 records, years 1901 - 1906"));
}

#[test]
fn prints_fewer_than_five() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, &serve_once("200 OK", "year,data\n1901,-7.67\n1902,-7.86\n"));

    cmd(&config)
        .assert()
        .success()
        .stdout("first five results\n[[1901, -7.67], [1902, -7.86]]\n");
}

#[test]
fn header_only_prints_empty_list() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, &serve_once("200 OK", "year,data\n"));

    cmd(&config)
        .assert()
        .success()
        .stdout("first five results\n[]\n");
}

#[test]
fn blank_line_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, &serve_once("200 OK", "year,data\n1901,-7.67\n\n1902,-7.86\n"));

    cmd(&config)
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("MissingField: line 3"));
}

#[test]
fn not_found_prints_diagnostic() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, &serve_once("404 Not Found", "no such series"));

    cmd(&config)
        .assert()
        .success()
        .stdout("Failed to get data: 404\n");
}

#[test]
fn malformed_row_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, &serve_once("200 OK", "year,data\n1999,-7.1\n2000,abc\n"));

    cmd(&config)
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("abc"));
}

#[test]
fn connection_refused_fails_without_output() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, &format!("http://{}/CAN.csv", addr));

    cmd(&config)
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Run failed"));
}

#[test]
fn missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();

    cmd(&tmp.path().join("absent.toml"))
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Initialization failed"));
}
