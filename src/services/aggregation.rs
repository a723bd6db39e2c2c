// src/services/aggregation.rs

// O coração derivado do sistema: projeções puras sobre as coleções de uma
// reserva. Nada aqui faz I/O nem olha o relógio: o "agora" sempre chega
// por parâmetro, então todo caminho é determinístico e testável a seco.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    finance::{Expense, PaymentSchedule, ReceivedAmount},
    insights::{DueBucket, FinancialSummary, Milestone, MilestoneStatus, StatusGroup, TaskBoardColumn},
    production::{Deliverable, DeliverableStatus, Shoot},
    tasks::{Task, TaskStatus},
};

// Ordem fixa das colunas do quadro de tarefas
const BOARD_ORDER: [DueBucket; 7] = [
    DueBucket::Overdue,
    DueBucket::Today,
    DueBucket::Tomorrow,
    DueBucket::ThisWeek,
    DueBucket::Upcoming,
    DueBucket::NoDueDate,
    DueBucket::Completed,
];

// =============================================================================
//  RESUMO FINANCEIRO
// =============================================================================

/// Deriva o resumo financeiro de uma reserva a partir das coleções já
/// buscadas. Soma sobre coleção vazia é zero; nenhum caminho gera pânico.
pub fn financial_summary(
    package_cost: Decimal,
    received: &[ReceivedAmount],
    schedules: &[PaymentSchedule],
    expenses: &[Expense],
) -> FinancialSummary {
    let total_received: Decimal = received.iter().map(|r| r.amount).sum();
    let total_scheduled: Decimal = schedules.iter().map(|s| s.amount).sum();
    let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();

    FinancialSummary {
        package_cost,
        pending_amount: package_cost - total_received,
        profit: package_cost - total_expenses,
        payment_percentage: payment_percentage(package_cost, total_received),
        total_received,
        total_scheduled,
        total_expenses,
    }
}

/// round(min(recebido / pacote, 1) * 100), como inteiro.
/// Pacote zerado (ou negativo) devolve 0, nunca divide por zero.
pub fn payment_percentage(package_cost: Decimal, total_received: Decimal) -> i32 {
    if package_cost <= Decimal::ZERO {
        return 0;
    }

    let ratio = (total_received / package_cost).min(Decimal::ONE);
    (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

// =============================================================================
//  MARCOS DE PROGRESSO
// =============================================================================

/// Os quatro marcos da reserva, sempre nesta ordem: sinal, sessões,
/// entregas, quitação.
pub fn booking_milestones(
    package_cost: Decimal,
    shoots: &[Shoot],
    deliverables: &[Deliverable],
    received: &[ReceivedAmount],
    now: DateTime<Utc>,
) -> Vec<Milestone> {
    let total_received: Decimal = received.iter().map(|r| r.amount).sum();

    // 1. Sinal: qualquer valor recebido conta
    let advance_status = if total_received > Decimal::ZERO {
        MilestoneStatus::Completed
    } else {
        MilestoneStatus::NotStarted
    };
    let advance_date = received.iter().filter_map(|r| r.paid_on).min();

    // 2. Sessões: feitas as que têm data estritamente antes de `now`.
    // Sessão sem data marcada ainda não aconteceu.
    let shoots_done = shoots
        .iter()
        .filter(|s| {
            s.date
                .map(|d| d.and_time(NaiveTime::MIN).and_utc() < now)
                .unwrap_or(false)
        })
        .count();
    let shoots_status = progress_status(shoots_done, shoots.len());

    // 3. Entregas: todas COMPLETED. Coleção vazia é NotStarted; sem
    // entrega contratada não existe entrega concluída.
    let deliverables_done = deliverables
        .iter()
        .filter(|d| d.status == DeliverableStatus::Completed)
        .count();
    let deliverables_status = progress_status(deliverables_done, deliverables.len());

    // 4. Quitação: 100% do pacote recebido. Parcial fica InProgress.
    let percentage = payment_percentage(package_cost, total_received);
    let payment_status = if percentage == 100 {
        MilestoneStatus::Completed
    } else if total_received > Decimal::ZERO {
        MilestoneStatus::InProgress
    } else {
        MilestoneStatus::NotStarted
    };
    let payment_date = received.iter().filter_map(|r| r.paid_on).max();

    vec![
        Milestone {
            id: "advance",
            label: "Sinal recebido",
            status: advance_status,
            date: advance_date,
        },
        Milestone {
            id: "shoots",
            label: "Sessões realizadas",
            status: shoots_status,
            date: None,
        },
        Milestone {
            id: "deliverables",
            label: "Entregas concluídas",
            status: deliverables_status,
            date: None,
        },
        Milestone {
            id: "payment",
            label: "Pagamento quitado",
            status: payment_status,
            date: payment_date,
        },
    ]
}

// done/total -> status, com a regra do vazio: 0 de 0 é NotStarted.
fn progress_status(done: usize, total: usize) -> MilestoneStatus {
    if total > 0 && done == total {
        MilestoneStatus::Completed
    } else if done > 0 {
        MilestoneStatus::InProgress
    } else {
        MilestoneStatus::NotStarted
    }
}

/// Percentual de marcos concluídos, arredondado.
pub fn overall_completion(milestones: &[Milestone]) -> i32 {
    if milestones.is_empty() {
        return 0;
    }

    let completed = milestones
        .iter()
        .filter(|m| m.status == MilestoneStatus::Completed)
        .count();

    let ratio = Decimal::from(completed as u64) / Decimal::from(milestones.len() as u64);
    (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

// =============================================================================
//  AGRUPAMENTOS
// =============================================================================

/// Particiona `items` em baldes por status. Baldes listados em
/// `status_order` saem naquela ordem; status não listados saem depois, em
/// ordem alfabética. Só baldes não-vazios são emitidos.
pub fn group_by_status<T, F>(
    items: Vec<T>,
    status_order: &[&str],
    status_of: F,
) -> Vec<StatusGroup<T>>
where
    T: utoipa::ToSchema,
    F: Fn(&T) -> String,
{
    let mut groups: Vec<StatusGroup<T>> = Vec::new();

    for item in items {
        let status = status_of(&item);
        match groups.iter_mut().find(|g| g.status == status) {
            Some(group) => group.items.push(item),
            None => groups.push(StatusGroup { status, items: vec![item] }),
        }
    }

    groups.sort_by(|a, b| {
        let pos_a = status_order.iter().position(|s| *s == a.status);
        let pos_b = status_order.iter().position(|s| *s == b.status);
        match (pos_a, pos_b) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.status.cmp(&b.status),
        }
    });

    groups
}

// =============================================================================
//  QUADRO POR VENCIMENTO
// =============================================================================

/// Classifica uma tarefa em exatamente um balde. Tarefa concluída vai
/// para `Completed` mesmo com vencimento no passado.
pub fn due_bucket(status: TaskStatus, due_date: Option<NaiveDate>, today: NaiveDate) -> DueBucket {
    if status == TaskStatus::Completed {
        return DueBucket::Completed;
    }

    let Some(due) = due_date else {
        return DueBucket::NoDueDate;
    };

    if due == today {
        DueBucket::Today
    } else if due == today + Duration::days(1) {
        DueBucket::Tomorrow
    } else if due < today {
        DueBucket::Overdue
    } else if due.iso_week() == today.iso_week() {
        // depois de amanhã, mas ainda dentro da mesma semana ISO
        DueBucket::ThisWeek
    } else {
        DueBucket::Upcoming
    }
}

/// Monta o quadro completo: as sete colunas, sempre presentes, na ordem
/// fixa de exibição.
pub fn bucket_tasks_by_due_date(tasks: Vec<Task>, today: NaiveDate) -> Vec<TaskBoardColumn> {
    let mut columns: Vec<TaskBoardColumn> = BOARD_ORDER
        .iter()
        .map(|b| TaskBoardColumn { bucket: *b, tasks: Vec::new() })
        .collect();

    for task in tasks {
        let bucket = due_bucket(task.status, task.due_date, today);
        if let Some(column) = columns.iter_mut().find(|c| c.bucket == bucket) {
            column.tasks.push(task);
        }
    }

    columns
}

// =============================================================================
//  TESTES
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::finance::BillTo;
    use crate::models::tasks::TaskPriority;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn received(amount: i64, paid_on: Option<NaiveDate>) -> ReceivedAmount {
        ReceivedAmount {
            id: Uuid::new_v4(),
            org_id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            amount: dec(amount),
            paid_on,
            description: None,
            created_at: Utc::now(),
        }
    }

    fn schedule(amount: i64) -> PaymentSchedule {
        PaymentSchedule {
            id: Uuid::new_v4(),
            org_id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            amount: dec(amount),
            due_date: None,
            description: None,
            created_at: Utc::now(),
        }
    }

    fn expense(amount: i64) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            org_id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            amount: dec(amount),
            category: "Transporte".to_string(),
            spent_on: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
            bill_to: BillTo::Studio,
            note: None,
            created_at: Utc::now(),
        }
    }

    fn shoot(date: Option<NaiveDate>) -> Shoot {
        Shoot {
            id: Uuid::new_v4(),
            org_id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            title: "Sessão".to_string(),
            date,
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn deliverable(status: DeliverableStatus) -> Deliverable {
        Deliverable {
            id: Uuid::new_v4(),
            org_id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            title: "Álbum".to_string(),
            status,
            cost: dec(800),
            quantity: 1,
            due_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn task(status: TaskStatus, due_date: Option<NaiveDate>) -> Task {
        Task {
            id: Uuid::new_v4(),
            org_id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            title: "Edição".to_string(),
            status,
            priority: TaskPriority::Medium,
            due_date,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summary_sums_and_pending() {
        let summary = financial_summary(
            dec(10_000),
            &[received(500, None), received(1_500, None)],
            &[schedule(4_000), schedule(4_000)],
            &[expense(300), expense(700)],
        );

        assert_eq!(summary.total_received, dec(2_000));
        assert_eq!(summary.total_scheduled, dec(8_000));
        assert_eq!(summary.total_expenses, dec(1_000));
        assert_eq!(summary.pending_amount, dec(8_000));
        assert_eq!(summary.profit, dec(9_000));
        assert_eq!(summary.payment_percentage, 20);
    }

    #[test]
    fn summary_over_empty_collections_is_zeroed() {
        let summary = financial_summary(dec(10_000), &[], &[], &[]);

        assert_eq!(summary.total_received, Decimal::ZERO);
        assert_eq!(summary.pending_amount, dec(10_000));
        assert_eq!(summary.profit, dec(10_000));
        assert_eq!(summary.payment_percentage, 0);
    }

    #[test]
    fn pending_amount_example() {
        let summary = financial_summary(dec(10_000), &[received(4_000, None)], &[], &[]);
        assert_eq!(summary.pending_amount, dec(6_000));
    }

    #[test]
    fn zero_package_cost_never_divides() {
        let summary = financial_summary(Decimal::ZERO, &[received(500, None)], &[], &[]);
        assert_eq!(summary.payment_percentage, 0);
    }

    #[test]
    fn percentage_is_capped_at_100() {
        // Pagou mais do que o pacote: percentual trava em 100,
        // pendente fica negativo (crédito).
        let summary = financial_summary(dec(1_000), &[received(1_500, None)], &[], &[]);
        assert_eq!(summary.payment_percentage, 100);
        assert_eq!(summary.pending_amount, dec(-500));
    }

    #[test]
    fn percentage_stays_within_bounds() {
        for amount in [0, 1, 333, 999, 1_000] {
            let pct = payment_percentage(dec(1_000), dec(amount));
            assert!((0..=100).contains(&pct), "pct {} fora da faixa", pct);
        }
    }

    #[test]
    fn deliverable_milestone_mixed_is_in_progress() {
        let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let deliverables = [
            deliverable(DeliverableStatus::Completed),
            deliverable(DeliverableStatus::Pending),
        ];

        let milestones = booking_milestones(dec(1_000), &[], &deliverables, &[], now);
        let m = milestones.iter().find(|m| m.id == "deliverables").unwrap();
        assert_eq!(m.status, MilestoneStatus::InProgress);
    }

    #[test]
    fn deliverable_milestone_all_completed() {
        let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let deliverables = [
            deliverable(DeliverableStatus::Completed),
            deliverable(DeliverableStatus::Completed),
        ];

        let milestones = booking_milestones(dec(1_000), &[], &deliverables, &[], now);
        let m = milestones.iter().find(|m| m.id == "deliverables").unwrap();
        assert_eq!(m.status, MilestoneStatus::Completed);
    }

    #[test]
    fn deliverable_milestone_empty_is_not_started() {
        // Reserva sem entrega contratada não pode aparecer como
        // "entregas concluídas".
        let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();

        let milestones = booking_milestones(dec(1_000), &[], &[], &[], now);
        let m = milestones.iter().find(|m| m.id == "deliverables").unwrap();
        assert_eq!(m.status, MilestoneStatus::NotStarted);
    }

    #[test]
    fn shoots_milestone_counts_only_past_dates() {
        let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();

        // Sem sessões: NotStarted
        let milestones = booking_milestones(dec(1_000), &[], &[], &[], now);
        let m = milestones.iter().find(|m| m.id == "shoots").unwrap();
        assert_eq!(m.status, MilestoneStatus::NotStarted);

        // Uma passada, uma futura e uma sem data: InProgress
        let shoots = [
            shoot(Some(ymd(2026, 8, 1))),
            shoot(Some(ymd(2026, 9, 1))),
            shoot(None),
        ];
        let milestones = booking_milestones(dec(1_000), &shoots, &[], &[], now);
        let m = milestones.iter().find(|m| m.id == "shoots").unwrap();
        assert_eq!(m.status, MilestoneStatus::InProgress);

        // Todas passadas: Completed
        let shoots = [shoot(Some(ymd(2026, 7, 1))), shoot(Some(ymd(2026, 8, 1)))];
        let milestones = booking_milestones(dec(1_000), &shoots, &[], &[], now);
        let m = milestones.iter().find(|m| m.id == "shoots").unwrap();
        assert_eq!(m.status, MilestoneStatus::Completed);
    }

    #[test]
    fn advance_and_payment_milestones() {
        let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let first = ymd(2026, 3, 10);
        let last = ymd(2026, 6, 20);

        // Parcial: sinal Completed (com a data mais antiga),
        // quitação InProgress.
        let partial = [received(400, Some(last)), received(100, Some(first))];
        let milestones = booking_milestones(dec(1_000), &[], &[], &partial, now);
        let advance = milestones.iter().find(|m| m.id == "advance").unwrap();
        assert_eq!(advance.status, MilestoneStatus::Completed);
        assert_eq!(advance.date, Some(first));
        let payment = milestones.iter().find(|m| m.id == "payment").unwrap();
        assert_eq!(payment.status, MilestoneStatus::InProgress);

        // Quitado: payment Completed com a data mais recente.
        let full = [received(400, Some(first)), received(600, Some(last))];
        let milestones = booking_milestones(dec(1_000), &[], &[], &full, now);
        let payment = milestones.iter().find(|m| m.id == "payment").unwrap();
        assert_eq!(payment.status, MilestoneStatus::Completed);
        assert_eq!(payment.date, Some(last));

        // Nada recebido: ambos NotStarted.
        let milestones = booking_milestones(dec(1_000), &[], &[], &[], now);
        assert_eq!(
            milestones.iter().find(|m| m.id == "advance").unwrap().status,
            MilestoneStatus::NotStarted
        );
        assert_eq!(
            milestones.iter().find(|m| m.id == "payment").unwrap().status,
            MilestoneStatus::NotStarted
        );
    }

    #[test]
    fn overall_completion_rounds() {
        let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();

        // Sinal pago + sessões feitas, entregas e quitação pendentes:
        // 2 de 4 marcos = 50%.
        let shoots = [shoot(Some(ymd(2026, 7, 1)))];
        let partial = [received(100, Some(ymd(2026, 3, 10)))];
        let milestones = booking_milestones(dec(1_000), &shoots, &[], &partial, now);
        assert_eq!(overall_completion(&milestones), 50);

        assert_eq!(overall_completion(&[]), 0);
    }

    #[test]
    fn group_by_status_respects_order_then_alphabetical() {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, utoipa::ToSchema)]
        struct Card {
            status: String,
        }

        let card = |status: &str| Card { status: status.to_string() };
        let items = vec![card("completed"), card("unknown"), card("pending")];

        let groups = group_by_status(items, &["pending", "completed"], |c| c.status.clone());

        let order: Vec<&str> = groups.iter().map(|g| g.status.as_str()).collect();
        assert_eq!(order, vec!["pending", "completed", "unknown"]);
    }

    #[test]
    fn group_by_status_emits_only_non_empty_buckets() {
        let items = vec![
            deliverable(DeliverableStatus::Pending),
            deliverable(DeliverableStatus::Pending),
        ];

        let groups = group_by_status(
            items,
            &["Pending", "Completed"],
            |d| d.status.as_str().to_string(),
        );

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].status, "Pending");
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn completed_task_never_lands_in_overdue() {
        let today = ymd(2026, 8, 5);
        let bucket = due_bucket(TaskStatus::Completed, Some(ymd(2026, 7, 1)), today);
        assert_eq!(bucket, DueBucket::Completed);
    }

    #[test]
    fn due_buckets_are_calendar_relative() {
        // 2026-08-05 é uma quarta-feira; a semana ISO vai até domingo 09.
        let today = ymd(2026, 8, 5);

        let cases = [
            (Some(ymd(2026, 8, 5)), DueBucket::Today),
            (Some(ymd(2026, 8, 6)), DueBucket::Tomorrow),
            (Some(ymd(2026, 8, 4)), DueBucket::Overdue),
            (Some(ymd(2026, 8, 8)), DueBucket::ThisWeek),
            (Some(ymd(2026, 8, 9)), DueBucket::ThisWeek),
            (Some(ymd(2026, 8, 10)), DueBucket::Upcoming),
            (None, DueBucket::NoDueDate),
        ];

        for (due, expected) in cases {
            assert_eq!(
                due_bucket(TaskStatus::Todo, due, today),
                expected,
                "vencimento {:?}",
                due
            );
        }
    }

    #[test]
    fn board_always_has_seven_columns_in_order() {
        let today = ymd(2026, 8, 5);
        let tasks = vec![
            task(TaskStatus::Todo, Some(ymd(2026, 8, 4))),
            task(TaskStatus::Completed, Some(ymd(2026, 8, 4))),
            task(TaskStatus::Todo, None),
        ];

        let board = bucket_tasks_by_due_date(tasks, today);

        assert_eq!(board.len(), 7);
        let buckets: Vec<DueBucket> = board.iter().map(|c| c.bucket).collect();
        assert_eq!(buckets, BOARD_ORDER.to_vec());

        assert_eq!(board[0].tasks.len(), 1); // Overdue
        assert_eq!(board[5].tasks.len(), 1); // NoDueDate
        assert_eq!(board[6].tasks.len(), 1); // Completed
    }
}
