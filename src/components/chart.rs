use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, Tooltip, Trigger,
    },
    series::{Bar, Line},
};
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_chart::use_chart;
use crate::models::dashboard::Dashboard;

const YEARLY_CHART_ID: &str = "yearly-trends-chart";
const YEAR_CHART_ID: &str = "players-by-year-chart";
const PROGRAM_CHART_ID: &str = "program-enrollment-chart";

const PLAYERS_COLOR: &str = "#0ea5e9";
const FAMILIES_COLOR: &str = "#8b5cf6";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub dashboard: Rc<Dashboard>,
}

/// Players and families per year, from the yearly breakdown
#[function_component(YearlyTrendChart)]
pub fn yearly_trend_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    use_chart(
        container_ref.clone(),
        YEARLY_CHART_ID,
        props.dashboard.clone(),
        build_yearly_chart,
    );

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={YEARLY_CHART_ID} />
        </div>
    }
}

#[function_component(YearBarChart)]
pub fn year_bar_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    use_chart(
        container_ref.clone(),
        YEAR_CHART_ID,
        props.dashboard.clone(),
        build_year_chart,
    );

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={YEAR_CHART_ID} />
        </div>
    }
}

/// Horizontal bars, one pair per program-year. Grows with the row count.
#[function_component(ProgramChart)]
pub fn program_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    use_chart(
        container_ref.clone(),
        PROGRAM_CHART_ID,
        props.dashboard.clone(),
        build_program_chart,
    );

    let style = format!("height: {}px;", props.dashboard.program_chart_height());

    html! {
        <div class="chart-container chart-container-tall" {style} ref={container_ref}>
            <div id={PROGRAM_CHART_ID} />
        </div>
    }
}

fn legend() -> Legend {
    Legend::new().bottom("0")
}

fn value_axis() -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .axis_label(AxisLabel::new().color(AXIS_COLOR))
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(GRID_COLOR)
                    .type_(LineStyleType::Dashed),
            ),
        )
}

fn category_axis(labels: Vec<String>) -> Axis {
    Axis::new()
        .type_(AxisType::Category)
        .data(labels)
        .axis_label(AxisLabel::new().color(AXIS_COLOR))
}

pub fn build_yearly_chart(dashboard: &Dashboard) -> CharmingChart {
    let series = dashboard.yearly_series();
    let years: Vec<String> = series.iter().map(|p| p.year.clone()).collect();
    let players: Vec<i64> = series.iter().map(|p| i64::from(p.players)).collect();
    let families: Vec<i64> = series.iter().map(|p| i64::from(p.families)).collect();

    CharmingChart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(legend())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(category_axis(years))
        .y_axis(value_axis())
        .series(
            Line::new()
                .name("Players")
                .data(players)
                .item_style(ItemStyle::new().color(PLAYERS_COLOR))
                .line_style(LineStyle::new().color(PLAYERS_COLOR)),
        )
        .series(
            Line::new()
                .name("Families")
                .data(families)
                .item_style(ItemStyle::new().color(FAMILIES_COLOR))
                .line_style(LineStyle::new().color(FAMILIES_COLOR)),
        )
}

pub fn build_year_chart(dashboard: &Dashboard) -> CharmingChart {
    let stats = dashboard.year_stats();
    let years: Vec<String> = stats.iter().map(|s| s.program_year.to_string()).collect();
    let players: Vec<i64> = stats.iter().map(|s| i64::from(s.unique_players)).collect();
    let families: Vec<i64> = stats.iter().map(|s| i64::from(s.unique_families)).collect();

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(legend())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(category_axis(years))
        .y_axis(value_axis())
        .series(
            Bar::new()
                .name("Players")
                .data(players)
                .item_style(ItemStyle::new().color(PLAYERS_COLOR)),
        )
        .series(
            Bar::new()
                .name("Families")
                .data(families)
                .item_style(ItemStyle::new().color(FAMILIES_COLOR)),
        )
}

/// Row labels for the program chart, top to bottom
pub fn program_labels(dashboard: &Dashboard) -> Vec<String> {
    dashboard
        .program_stats()
        .iter()
        .map(|s| s.display_name())
        .collect()
}

pub fn build_program_chart(dashboard: &Dashboard) -> CharmingChart {
    // Category axes draw bottom-up, so feed rows in reverse to keep the
    // backend's first row at the top
    let stats = dashboard.program_stats();
    let mut labels = program_labels(dashboard);
    labels.reverse();
    let players: Vec<i64> = stats
        .iter()
        .rev()
        .map(|s| i64::from(s.player_count))
        .collect();
    let families: Vec<i64> = stats
        .iter()
        .rev()
        .map(|s| i64::from(s.family_count))
        .collect();

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(legend())
        .grid(
            Grid::new()
                .left("2%")
                .right("4%")
                .bottom("6%")
                .contain_label(true),
        )
        .x_axis(value_axis())
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().color(AXIS_COLOR).interval(0)),
        )
        .series(
            Bar::new()
                .name("Players")
                .data(players)
                .item_style(ItemStyle::new().color(PLAYERS_COLOR)),
        )
        .series(
            Bar::new()
                .name("Families")
                .data(families)
                .item_style(ItemStyle::new().color(FAMILIES_COLOR)),
        )
}
