use crate::models::dashboard::Dashboard;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnrollmentTableProps {
    pub dashboard: Rc<Dashboard>,
}

#[function_component(EnrollmentTable)]
pub fn enrollment_table(props: &EnrollmentTableProps) -> Html {
    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Player Name"}</th>
                        <th>{"Program"}</th>
                        <th>{"Division"}</th>
                        <th>{"Order Date"}</th>
                        <th>{"Payment Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.dashboard.enrollment_rows().iter().map(|enrollment| {
                        let badge = enrollment.payment_badge();
                        html! {
                            <tr>
                                <td class="strong">{enrollment.player_name()}</td>
                                <td>{&enrollment.program_name}</td>
                                <td>{&enrollment.division_name}</td>
                                <td class="muted">{enrollment.order_date_label()}</td>
                                <td>
                                    <span class={badge.css_class()}>{badge.label.clone()}</span>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
