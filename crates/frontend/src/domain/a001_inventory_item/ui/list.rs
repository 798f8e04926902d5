use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::controller::InventoryController;
use crate::domain::a001_inventory_item::state::ItemRow;
use crate::shared::dialogs::BrowserDialogs;

/// Registered items with per-row edit/delete actions
#[component]
pub fn ItemListView(controller: InventoryController, rows: Vec<ItemRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <div class="empty-state">
                <p>{"No hay productos registrados"}</p>
            </div>
        }
        .into_any();
    }

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Nombre"</TableHeaderCell>
                    <TableHeaderCell>"Cantidad"</TableHeaderCell>
                    <TableHeaderCell>"Precio"</TableHeaderCell>
                    <TableHeaderCell>"Categoría"</TableHeaderCell>
                    <TableHeaderCell>"Fecha"</TableHeaderCell>
                    <TableHeaderCell>"Acciones"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let id = row.id;
                        let raw_id = id.as_string();
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{row.quantity}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{row.price}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{row.category}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{row.date}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| controller.edit(id, &BrowserDialogs)
                                        >
                                            {"Editar"}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| controller.delete(&raw_id, &BrowserDialogs)
                                        >
                                            {"Eliminar"}
                                        </Button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}
