use crate::models::dashboard::Dashboard;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DivisionTableProps {
    pub dashboard: Rc<Dashboard>,
}

#[function_component(DivisionTable)]
pub fn division_table(props: &DivisionTableProps) -> Html {
    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Year"}</th>
                        <th>{"Program"}</th>
                        <th>{"Division"}</th>
                        <th>{"Gender"}</th>
                        <th>{"Players"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.dashboard.division_rows().iter().map(|stat| html! {
                        <tr>
                            <td>{stat.program_year}</td>
                            <td>{&stat.program_name}</td>
                            <td>{&stat.division_name}</td>
                            <td class="muted">{stat.gender_label()}</td>
                            <td class="numeric">{stat.players}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
