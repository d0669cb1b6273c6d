use std::fs;
use std::sync::Arc;
use tokenswap::core::{
    BalanceListDeriver, ConversionError, PriceFeed, PriceSnapshot, PriorityTable, WalletBalance,
    convert,
};
use tokenswap::providers::SwitcheoPriceFeed;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const PRICES_JSON: &str = r#"[
        {"currency": "USD", "date": "2023-08-29T07:10:30.000Z", "price": 1},
        {"currency": "EUR", "date": "2023-08-29T07:10:30.000Z", "price": 0.9},
        {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.9337373737374},
        {"currency": "OSMO", "date": "2023-08-29T07:10:50.000Z", "price": 0.3772974333333333},
        {"currency": "ETH", "date": "2023-08-29T07:10:53.000Z", "price": 1650.0},
        {"currency": "BROKEN", "price": "n/a"}
    ]"#;

    pub async fn create_mock_server(mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/prices.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(base_url: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
            providers:
              prices:
                base_url: {base_url}
            balances:
              - currency: "ETH"
                amount: 2.5
                blockchain: "Ethereum"
              - currency: "OSMO"
                amount: 100
                blockchain: "Osmosis"
              - currency: "SOL"
                amount: 4
                blockchain: "Solana"
              - currency: "NEO"
                amount: -1
                blockchain: "Neo"
        "#
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_feed_to_conversion() {
    let mock_server = test_utils::create_mock_server(test_utils::PRICES_JSON).await;
    let feed = SwitcheoPriceFeed::new(&mock_server.uri());
    let snapshot = PriceSnapshot::new();

    let prices = snapshot.refresh(&feed).await.unwrap();
    info!(tokens = prices.len(), "Loaded price snapshot");

    assert_eq!(prices.len(), 4);
    assert_eq!(prices.price_of("ETH"), Some(1650.0));

    let result = convert(&prices, "USD", "EUR", 100.0).unwrap();
    assert_eq!(format!("{result:.6}"), "111.111111");

    let result = convert(&prices, "ETH", "USD", 2.0).unwrap();
    assert_eq!(result, 3300.0);

    assert_eq!(
        convert(&prices, "USD", "BROKEN", 1.0),
        Err(ConversionError::PriceUnavailable)
    );
}

#[test_log::test(tokio::test)]
async fn test_feed_to_wallet_rows() {
    let mock_server = test_utils::create_mock_server(test_utils::PRICES_JSON).await;
    let feed = SwitcheoPriceFeed::new(&mock_server.uri());
    let prices = tokenswap::core::PriceTable::from(feed.fetch_prices().await.unwrap());

    let balances = vec![
        WalletBalance::new("ETH", 2.5, "Ethereum"),
        WalletBalance::new("ZIL", 10.0, "Zilliqa"),
        WalletBalance::new("OSMO", 100.0, "Osmosis"),
        WalletBalance::new("SOL", 4.0, "Solana"),
    ];
    let mut deriver = BalanceListDeriver::new(Arc::new(PriorityTable::default()));
    let rows = deriver.derive(&balances, &prices);

    let keys: Vec<&str> = rows.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec!["OSMO", "ETH", "ZIL"]);
    assert_eq!(rows[1].formatted, "3");
    assert_eq!(rows[1].usd_value, 2.5 * 1650.0);
    assert_eq!(rows[2].usd_value, 0.0);
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_mock_server(test_utils::PRICES_JSON).await;
    let config_file = test_utils::write_config(&mock_server.uri());
    let config_path = config_file.path().to_str().unwrap();

    let commands = vec![
        tokenswap::AppCommand::Prices,
        tokenswap::AppCommand::Wallet,
        tokenswap::AppCommand::Swap {
            amount: "100".to_string(),
            from: "USD".to_string(),
            to: "EUR".to_string(),
        },
        // Rejected input is reported, not returned as an error
        tokenswap::AppCommand::Swap {
            amount: "0".to_string(),
            from: "USD".to_string(),
            to: "USD".to_string(),
        },
    ];

    for command in commands {
        let result = tokenswap::run_command(command.clone(), Some(config_path)).await;
        assert!(
            result.is_ok(),
            "Command {command:?} failed with: {:?}",
            result.err()
        );
    }
}

#[test_log::test(tokio::test)]
async fn test_app_fails_when_feed_is_down() {
    let mock_server = wiremock::MockServer::start().await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = tokenswap::run_command(
        tokenswap::AppCommand::Prices,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("a missing feed should fail the command");
    assert!(err.to_string().contains("Failed to load token prices"));
}

#[test_log::test(tokio::test)]
async fn test_app_fails_on_invalid_config() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(config_file.path(), "balances: [oops").expect("Failed to write config file");

    let result = tokenswap::run_command(
        tokenswap::AppCommand::Wallet,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}
