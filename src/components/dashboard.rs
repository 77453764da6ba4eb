use yew::prelude::*;

use crate::components::{
    chart::{ProgramChart, YearBarChart, YearlyTrendChart},
    division_table::DivisionTable,
    enrollment_table::EnrollmentTable,
    leaderboard::Leaderboard,
    status::Status,
    summary::Summary,
};
use crate::hooks::use_dashboard::{DashboardState, use_dashboard};

/// Route root: owns the single load and hands its state down
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_dashboard();

    html! { <DashboardView state={(*state).clone()} /> }
}

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub state: DashboardState,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let Some(dashboard) = props.state.data() else {
        return html! {
            <main class="app-main centered">
                <Status state={props.state.clone()} />
            </main>
        };
    };

    html! {
        <>
            <div class="page-heading">
                <h1>{"LPFC Athletic Programs Dashboard"}</h1>
                <p>{"Enrollment and Program Statistics"}</p>
            </div>

            <main class="app-main">
                <section class="data-section">
                    <Summary cards={dashboard.summary()} />
                </section>

                <div class="chart-row">
                    <section class="chart-section">
                        <h2>{"Yearly Trends"}</h2>
                        <YearlyTrendChart dashboard={dashboard.clone()} />
                    </section>

                    <section class="chart-section">
                        <h2>{"Players by Year"}</h2>
                        <YearBarChart dashboard={dashboard.clone()} />
                    </section>
                </div>

                <section class="chart-section">
                    <h2>{"Program Enrollment"}</h2>
                    <ProgramChart dashboard={dashboard.clone()} />
                </section>

                <section class="table-section">
                    <h2>{"Division Statistics"}</h2>
                    <DivisionTable dashboard={dashboard.clone()} />
                </section>

                <section class="table-section">
                    <h2>{"Recent Enrollments"}</h2>
                    <EnrollmentTable dashboard={dashboard.clone()} />
                </section>

                <section class="table-section">
                    <h2>{"Top 50 Players by Program Enrollments"}</h2>
                    <Leaderboard dashboard={dashboard.clone()} />
                </section>
            </main>
        </>
    }
}
