// src/services/document_service.rs

use genpdf::{elements, style, Element};
use image::Luma;
use qrcode::QrCode;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, CrmRepository, FinanceRepository, TenancyRepository},
    services::aggregation,
};

#[derive(Clone)]
pub struct DocumentService {
    booking_repo: BookingRepository,
    crm_repo: CrmRepository,
    finance_repo: FinanceRepository,
    tenancy_repo: TenancyRepository,
}

impl DocumentService {
    pub fn new(
        booking_repo: BookingRepository,
        crm_repo: CrmRepository,
        finance_repo: FinanceRepository,
        tenancy_repo: TenancyRepository,
    ) -> Self {
        Self { booking_repo, crm_repo, finance_repo, tenancy_repo }
    }

    /// Gera a fatura da reserva em PDF: pagamentos recebidos, parcelas
    /// combinadas, totais e QR Code de pagamento (quando o estúdio tem
    /// chave PIX configurada).
    pub async fn generate_invoice_pdf(
        &self,
        org_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Vec<u8>, AppError> {
        // 1. Busca os dados
        let booking = self
            .booking_repo
            .find_booking(org_id, booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada.".to_string()))?;

        let client = self
            .crm_repo
            .find_client(org_id, booking.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado.".to_string()))?;

        let org = self
            .tenancy_repo
            .find_organization(org_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estúdio não encontrado.".to_string()))?;

        let received = self.finance_repo.list_received(org_id, booking_id).await?;
        let schedules = self.finance_repo.list_schedules(org_id, booking_id).await?;

        let summary =
            aggregation::financial_summary(booking.package_cost, &received, &schedules, &[]);

        // 2. Configura o PDF
        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None).map_err(|_| {
            AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string())
        })?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("Fatura - {}", booking.title));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(
            elements::Paragraph::new(org.name.clone())
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(elements::Break::new(1.5));

        doc.push(
            elements::Paragraph::new(format!("FATURA - {}", booking.title))
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        doc.push(elements::Paragraph::new(format!(
            "Data: {}",
            booking.created_at.format("%d/%m/%Y")
        )));
        doc.push(elements::Paragraph::new(format!("Cliente: {}", client.full_name)));

        doc.push(elements::Break::new(2));

        // --- PAGAMENTOS RECEBIDOS ---
        doc.push(
            elements::Paragraph::new("PAGAMENTOS RECEBIDOS")
                .styled(style::Style::new().bold().with_font_size(12)),
        );

        let mut table = elements::TableLayout::new(vec![2, 4, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Data").styled(style_bold))
            .element(elements::Paragraph::new("Descrição").styled(style_bold))
            .element(elements::Paragraph::new("Valor").styled(style_bold))
            .push()
            .expect("Table error");

        for item in &received {
            let paid_on = item
                .paid_on
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "-".to_string());
            let description = item.description.clone().unwrap_or_else(|| "Pagamento".to_string());
            table
                .row()
                .element(elements::Paragraph::new(paid_on))
                .element(elements::Paragraph::new(description))
                .element(elements::Paragraph::new(format!("R$ {:.2}", item.amount)))
                .push()
                .expect("Table row error");
        }

        doc.push(table);
        doc.push(elements::Break::new(1.5));

        // --- PARCELAS COMBINADAS ---
        if !schedules.is_empty() {
            doc.push(
                elements::Paragraph::new("PARCELAS COMBINADAS")
                    .styled(style::Style::new().bold().with_font_size(12)),
            );

            let mut table = elements::TableLayout::new(vec![2, 4, 2]);
            table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

            table
                .row()
                .element(elements::Paragraph::new("Vencimento").styled(style_bold))
                .element(elements::Paragraph::new("Descrição").styled(style_bold))
                .element(elements::Paragraph::new("Valor").styled(style_bold))
                .push()
                .expect("Table error");

            for item in &schedules {
                let due_date = item
                    .due_date
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| "A combinar".to_string());
                let description = item.description.clone().unwrap_or_else(|| "Parcela".to_string());
                table
                    .row()
                    .element(elements::Paragraph::new(due_date))
                    .element(elements::Paragraph::new(description))
                    .element(elements::Paragraph::new(format!("R$ {:.2}", item.amount)))
                    .push()
                    .expect("Table row error");
            }

            doc.push(table);
            doc.push(elements::Break::new(1.5));
        }

        // --- TOTAIS ---
        let mut totals = elements::Paragraph::new(format!(
            "PACOTE: R$ {:.2}   RECEBIDO: R$ {:.2}   PENDENTE: R$ {:.2}",
            summary.package_cost, summary.total_received, summary.pending_amount
        ));
        totals.set_alignment(genpdf::Alignment::Right);
        doc.push(totals.styled(style::Style::new().bold().with_font_size(12)));

        doc.push(elements::Break::new(2));

        // --- ÁREA DE PAGAMENTO (QR CODE) ---
        if let Some(key) = org.pix_key {
            doc.push(
                elements::Paragraph::new("PAGAMENTO VIA PIX")
                    .styled(style::Style::new().bold().with_font_size(12)),
            );

            doc.push(elements::Paragraph::new(format!("Chave: {}", key)));
            doc.push(elements::Break::new(1));

            // QR Code simples da chave. Para o payload "Pix Copia e Cola"
            // oficial (EMV BR Code) seria preciso uma lib específica.
            let code = QrCode::new(key.as_bytes())
                .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

            let image_buffer = code.render::<Luma<u8>>().build();
            let dynamic_image = image::DynamicImage::ImageLuma8(image_buffer);

            let pdf_image = genpdf::elements::Image::from_dynamic_image(dynamic_image)
                .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?
                .with_scale(genpdf::Scale::new(0.5, 0.5));

            doc.push(pdf_image);
        }

        // --- RODAPÉ ---
        if let Some(addr) = org.address {
            doc.push(elements::Break::new(2));
            doc.push(
                elements::Paragraph::new(addr)
                    .styled(style::Style::new().italic().with_font_size(8)),
            );
        }

        // 3. Renderiza para buffer (memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        Ok(buffer)
    }
}
