/// Estado de un paso reconstruido desde el log de eventos.
///
/// Las transiciones válidas son:
/// - `Pending` -> `Running`
/// - `Running` -> `Succeeded`
/// - `Running` -> `Failed`
///
/// Un paso `Failed` deja al resto en `Pending` para siempre: no hay reintentos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}
