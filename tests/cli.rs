use assert_cmd::prelude::*;
use file_diff::diff;
use predicates::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn data_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(env::current_dir()?.join("tests").join("data"))
}

fn render_cmd(order_filename: &str) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("order_view")?;

    let path = data_path()?;

    cmd.env("TZ", "UTC")
        .arg("render")
        .arg("--order-template")
        .arg(path.join("order_template.html"))
        .arg("--item-template")
        .arg(path.join("item_template.html"))
        .arg("--order-path")
        .arg(path.join(order_filename));

    Ok(cmd)
}

#[test]
fn version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("order_view")?;

    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn render_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let path = data_path()?;
    let out_path = env::temp_dir().join("order_view_expected.html");

    let mut cmd = render_cmd("order.json")?;
    cmd.arg("--out-path").arg(out_path.clone());

    cmd.assert().success();

    assert!(diff(
        path.join("expected.html").to_str().unwrap(),
        out_path.to_str().unwrap(),
    ));

    Ok(())
}

#[test]
fn render_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = render_cmd("order.json")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<td>Mascaras</td>"))
        .stdout(predicate::str::contains("<td>без скидки</td>"))
        .stdout(predicate::str::contains("26.11.2021, 06:22:19"));

    Ok(())
}

#[test]
fn render_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = render_cmd("not_found.json")?;

    cmd.assert()
        .success()
        .stdout("<p>Заказ не найден</p>\n");

    Ok(())
}

#[test]
fn render_broken_response() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = render_cmd("broken.json")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<p>Ошибка: "));

    Ok(())
}

#[test]
fn render_missing_template() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("order_view")?;

    let path = data_path()?;

    cmd.arg("render")
        .arg("--order-template")
        .arg(path.join("no_such_template.html"))
        .arg("--item-template")
        .arg(path.join("item_template.html"))
        .arg("--order-path")
        .arg(path.join("order.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("read template file"));

    Ok(())
}

#[test]
fn inspect() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("order_view")?;

    let path = data_path()?;

    cmd.arg("inspect")
        .arg("--order-template")
        .arg(path.join("order_template.html"))
        .arg("--item-template")
        .arg(path.join("item_template.html"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{{items_html}}"))
        .stdout(predicate::str::contains("(unknown)").not())
        .stdout(predicate::str::contains("unused: customer_id"))
        .stdout(predicate::str::contains("item_total_price"));

    Ok(())
}

#[test]
fn inspect_shipped_templates() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("order_view")?;

    let path = env::current_dir()?.join("templates");

    cmd.arg("inspect")
        .arg("--order-template")
        .arg(path.join("order_template.html"))
        .arg("--item-template")
        .arg(path.join("item_template.html"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(unknown)").not())
        .stdout(predicate::str::contains("unused").not());

    Ok(())
}
