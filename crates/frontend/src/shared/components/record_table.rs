use leptos::prelude::*;

/// Plain table over an ordered snapshot.
///
/// Rows render exactly in the order delivered; no sorting or filtering
/// happens here.
#[component]
pub fn RecordTable(
    headers: Vec<&'static str>,
    #[prop(into)] rows: Signal<Vec<Vec<String>>>,
) -> impl IntoView {
    let each_rows = move || rows.get().into_iter().enumerate().collect::<Vec<_>>();
    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        {headers
                            .into_iter()
                            .map(|header| view! { <th>{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=each_rows
                        key=|(index, row)| (*index, row.clone())
                        children=move |(_, row)| {
                            view! {
                                <tr>
                                    {row
                                        .into_iter()
                                        .map(|cell| view! { <td>{cell}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
