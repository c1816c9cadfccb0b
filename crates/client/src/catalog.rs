//! Static catalog of Riksbank forecast series.
//!
//! Maps tool names to series identifiers with agent-facing descriptions.
//! Pure data; the generic fetcher does the work.

/// One catalog entry: a named indicator backed by a fixed series identifier.
#[derive(Debug, Clone, Copy)]
pub struct SeriesInfo {
    pub tool_name: &'static str,
    pub series_id: &'static str,
    pub description: &'static str,
}

/// All per-series indicators exposed as tools, grouped by domain.
pub const SERIES_CATALOG: &[SeriesInfo] = &[
    // Real economy indicators
    SeriesInfo {
        tool_name: "get_gdp_data",
        series_id: "SEQGDPNAYCA",
        description: "Get calendar-adjusted year-over-year GDP growth data \
            (SEQGDPNAYCA). Quarterly GDP growth rate, calendar-adjusted.",
    },
    SeriesInfo {
        tool_name: "get_unemployment_data",
        series_id: "SEQLABUEASA",
        description: "Get seasonally adjusted unemployment rate data \
            (SEQLABUEASA). Unemployment rate as percentage of labor force.",
    },
    SeriesInfo {
        tool_name: "get_hourly_labour_cost_data",
        series_id: "SEACOMNAYCA",
        description: "Get annual hourly labour cost changes from National \
            Accounts (SEACOMNAYCA). Year-over-year changes in hourly labour costs.",
    },
    SeriesInfo {
        tool_name: "get_hourly_wage_na_data",
        series_id: "SEAWAGNAYCA",
        description: "Get National Accounts hourly wage growth data \
            (SEAWAGNAYCA). Year-over-year hourly wage growth.",
    },
    SeriesInfo {
        tool_name: "get_hourly_wage_nmo_data",
        series_id: "SEAWAGKLYNA",
        description: "Get National Mediation Office hourly wage measure \
            (SEAWAGKLYNA). Wage statistics from the National Mediation Office.",
    },
    SeriesInfo {
        tool_name: "get_gdp_gap_data",
        series_id: "SEQGDPGAPYSA",
        description: "Get GDP output gap data (SEQGDPGAPYSA). Output gap as \
            percentage of potential output.",
    },
    SeriesInfo {
        tool_name: "get_general_government_net_lending_data",
        series_id: "SEAPBSNAYNA",
        description: "Get general government net lending data (SEAPBSNAYNA). \
            Government fiscal position as percentage of GDP.",
    },
    // Labor market
    SeriesInfo {
        tool_name: "get_employed_persons_data",
        series_id: "SEQLABEPASA",
        description: "Get employed persons data (SEQLABEPASA). Seasonally \
            adjusted employment level in thousands.",
    },
    SeriesInfo {
        tool_name: "get_labour_force_data",
        series_id: "SEQLABLFASA",
        description: "Get labour force data (SEQLABLFASA). Seasonally adjusted \
            labor force level in thousands.",
    },
    // Demographics
    SeriesInfo {
        tool_name: "get_population_data",
        series_id: "SEPOPYRCA",
        description: "Get total population forecast data (SEPOPYRCA). Total \
            population in thousands.",
    },
    SeriesInfo {
        tool_name: "get_population_level_data",
        series_id: "SEQPOPNAANA",
        description: "Get population aged 15-74 data (SEQPOPNAANA). Population \
            in working age range (15-74 years) in thousands.",
    },
    // Inflation measures
    SeriesInfo {
        tool_name: "get_cpi_data",
        series_id: "SEMCPINAYNA",
        description: "Get headline CPI year-over-year inflation data \
            (SEMCPINAYNA). Consumer Price Index year-over-year change.",
    },
    SeriesInfo {
        tool_name: "get_cpi_index_data",
        series_id: "SEMCPINAANA",
        description: "Get CPI index level data (SEMCPINAANA). CPI index level \
            with base 1980=100.",
    },
    SeriesInfo {
        tool_name: "get_cpi_yoy_data",
        series_id: "SEMCPINAYNA",
        description: "Get CPI year-over-year change data (SEMCPINAYNA). CPI \
            year-over-year percentage change.",
    },
    SeriesInfo {
        tool_name: "get_cpif_data",
        series_id: "SEMCPIFNAYNA",
        description: "Get CPIF inflation data (SEMCPIFNAYNA). CPIF (CPI with \
            fixed interest rate) is the Riksbank's operational inflation target.",
    },
    SeriesInfo {
        tool_name: "get_cpif_yoy_data",
        series_id: "SEMCPIFNAYNA",
        description: "Get CPIF year-over-year inflation data (SEMCPIFNAYNA). \
            CPIF year-over-year percentage change.",
    },
    SeriesInfo {
        tool_name: "get_cpif_ex_energy_data",
        series_id: "SEMCPIFFEXYNA",
        description: "Get core CPIF inflation excluding energy (SEMCPIFFEXYNA). \
            Core inflation measure excluding energy prices.",
    },
    SeriesInfo {
        tool_name: "get_cpif_ex_energy_index_data",
        series_id: "SEMCPIFFEXANA",
        description: "Get core CPIF index excluding energy (SEMCPIFFEXANA). \
            Core inflation index level (base 1987=100).",
    },
    // GDP variants
    SeriesInfo {
        tool_name: "get_gdp_level_saca_data",
        series_id: "SEQGDPNAASA",
        description: "Get real GDP level with full seasonal and calendar \
            adjustment (SEQGDPNAASA). Real GDP in million SEK.",
    },
    SeriesInfo {
        tool_name: "get_gdp_level_ca_data",
        series_id: "SEQGDPNAACA",
        description: "Get real GDP level with calendar adjustment only \
            (SEQGDPNAACA). Real GDP in million SEK, calendar-adjusted.",
    },
    SeriesInfo {
        tool_name: "get_gdp_level_na_data",
        series_id: "SEQGDPNAANA",
        description: "Get real GDP level without adjustments (SEQGDPNAANA). \
            Real GDP in million SEK, non-adjusted raw series.",
    },
    SeriesInfo {
        tool_name: "get_gdp_yoy_sa_data",
        series_id: "SEQGDPNAYSA",
        description: "Get GDP year-over-year growth with full adjustments \
            (SEQGDPNAYSA). GDP year-over-year, seasonally and calendar adjusted.",
    },
    SeriesInfo {
        tool_name: "get_gdp_yoy_na_data",
        series_id: "SEQGDPNAYNA",
        description: "Get GDP year-over-year growth without adjustments \
            (SEQGDPNAYNA). GDP year-over-year, non-adjusted.",
    },
    // Monetary policy
    SeriesInfo {
        tool_name: "get_policy_rate_data",
        series_id: "SEQRATENAYNA",
        description: "Get Riksbank policy rate (repo rate) data (SEQRATENAYNA). \
            Riksbank repo rate, quarterly mean in percent.",
    },
    // Exchange rates
    SeriesInfo {
        tool_name: "get_nominal_exchange_rate_kix_index_data",
        series_id: "SEQKIXNAANA",
        description: "Get KIX exchange rate index data (SEQKIXNAANA). KIX \
            exchange rate index (base November 1992=100).",
    },
];
