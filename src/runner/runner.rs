//! End-to-end checks against the optimizer service
//!
//! Every call is made in sequence and every failure is handled where it
//! happens: the runner prints a diagnostic and carries on with a sentinel
//! (`false`, `None`, an empty sweep). Nothing in here returns an error.

use super::report::{
    PREVIEW_CHARS, RULE_WIDTH, Reporter, TABLE_WIDTH, char_reduction, or_na, preview,
};
use super::summary::{RunStats, RunSummary, StrategySweep};
use crate::client::{
    BatchOptimizeResponse, ClientConfig, ClientError, OptimizationResult, OptimizerClient,
    SaveRecord, Strategy,
};
use crate::savings::{SavingsCalculator, format_currency};
use crate::utils::error::Result;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Drives the optimizer service through the full test sequence
#[derive(Debug)]
pub struct TestRunner {
    client: OptimizerClient,
    calculator: SavingsCalculator,
    reporter: Reporter,
    persist_results: bool,
    stats: RunStats,
}

impl TestRunner {
    /// Runner reporting to stdout
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_reporter(config, Reporter::stdout())
    }

    pub fn with_reporter(config: ClientConfig, reporter: Reporter) -> Result<Self> {
        let client = OptimizerClient::new(config)?;
        Ok(Self {
            client,
            calculator: SavingsCalculator::default(),
            reporter,
            persist_results: true,
            stats: RunStats::default(),
        })
    }

    /// Replace the default (Massachusetts) savings rates
    pub fn with_calculator(mut self, calculator: SavingsCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Whether successful optimizations are sent to the save endpoint
    pub fn persist_results(mut self, enabled: bool) -> Self {
        self.persist_results = enabled;
        self
    }

    pub fn client(&self) -> &OptimizerClient {
        &self.client
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Probe the service info endpoint
    pub async fn check_health(&mut self) -> bool {
        match self.client.service_info().await {
            Ok(info) => {
                self.reporter.line("✅ API is running and accessible");
                self.reporter.line(format!(
                    "📋 API Info: {} v{}",
                    info.name_or_unknown(),
                    info.version_or_unknown()
                ));
                true
            }
            Err(ClientError::Api { status, .. }) => {
                self.reporter
                    .line(format!("❌ API returned status code: {}", status.as_u16()));
                false
            }
            Err(ClientError::Parse(e)) => {
                self.reporter
                    .line(format!("❌ API returned an unreadable info payload: {}", e));
                false
            }
            Err(e) => {
                self.reporter
                    .line(format!("❌ Failed to connect to API: {}", e));
                false
            }
        }
    }

    /// Optimize one prompt and print the before/after report
    pub async fn optimize(
        &mut self,
        prompt: &str,
        strategy: Strategy,
    ) -> Option<OptimizationResult> {
        self.reporter.section("🚀 Testing prompt optimization...");
        self.reporter.line(format!(
            "📝 Original prompt: {}",
            preview(prompt, PREVIEW_CHARS)
        ));
        self.reporter.line(format!("🎯 Strategy: {}", strategy));

        self.stats.optimizations_attempted += 1;
        let request = self.client.request_for(prompt, strategy);
        let start = Instant::now();
        let outcome = self.client.optimize(&request).await;
        let elapsed = start.elapsed();

        match outcome {
            Ok(result) => {
                self.reporter.line(format!(
                    "⏱️  Request took: {:.2} seconds",
                    elapsed.as_secs_f64()
                ));
                self.reporter.line("📊 Response status: 200");
                self.report_optimization(&result);
                self.stats.optimizations_succeeded += 1;
                info!("Optimization {} succeeded", result.id_or_na());
                Some(result)
            }
            Err(ClientError::Api { status, body }) => {
                self.reporter.line(format!(
                    "⏱️  Request took: {:.2} seconds",
                    elapsed.as_secs_f64()
                ));
                self.reporter.line(format!(
                    "❌ Optimization failed with status {}",
                    status.as_u16()
                ));
                let details = ClientError::Api { status, body }
                    .api_body_pretty()
                    .unwrap_or_default();
                self.reporter.line(format!("Error details: {}", details));
                None
            }
            Err(e) => {
                warn!("Optimization request failed: {}", e);
                self.reporter.line(format!("❌ Request failed: {}", e));
                None
            }
        }
    }

    fn report_optimization(&mut self, result: &OptimizationResult) {
        self.reporter.line("✅ Optimization successful!");
        self.reporter
            .line(format!("🆔 Optimization ID: {}", result.id_or_na()));

        let original = result.original_prompt_or_na();
        let optimized = result.optimized_prompt_or_na();

        self.reporter.section("📝 ORIGINAL PROMPT:");
        self.reporter.rule(RULE_WIDTH);
        self.reporter.line(original);
        self.reporter.line(format!(
            "📏 Length: {} characters",
            original.chars().count()
        ));

        self.reporter.section("✨ OPTIMIZED PROMPT:");
        self.reporter.rule(RULE_WIDTH);
        self.reporter.line(optimized);
        self.reporter.line(format!(
            "📏 Length: {} characters",
            optimized.chars().count()
        ));

        let (reduction, percentage) = char_reduction(original, optimized);
        self.reporter.line(format!(
            "📉 Character reduction: {} ({:.1}%)",
            reduction, percentage
        ));

        if let Some(metrics) = &result.metrics {
            self.reporter.section("📊 TOKEN METRICS:");
            self.reporter.rule(RULE_WIDTH);
            self.reporter.line(format!(
                "   • Original tokens: {}",
                or_na(metrics.original_tokens)
            ));
            self.reporter.line(format!(
                "   • Optimized tokens: {}",
                or_na(metrics.optimized_tokens)
            ));
            self.reporter
                .line(format!("   • Tokens saved: {}", or_na(metrics.tokens_saved)));
            self.reporter.line(format!(
                "   • Reduction: {}%",
                or_na(metrics.reduction_percentage)
            ));
            self.reporter.line(format!(
                "   • Cost saved (service estimate): {}",
                or_na(metrics.estimated_cost_savings.map(|c| format!("${:.6}", c)))
            ));
            self.reporter.line(format!(
                "   • Processing time: {}ms",
                or_na(metrics.processing_time_ms)
            ));
        }
    }

    /// Derive the record sent to the save endpoint
    ///
    /// Money, energy and emissions all come from the calculator; the service's
    /// own `estimatedCostSavings` is not used here.
    pub fn save_record_for(&self, result: &OptimizationResult, strategy: Strategy) -> SaveRecord {
        let metrics = result.metrics.clone().unwrap_or_default();
        let tokens_saved = metrics.tokens_saved_or_zero();
        let savings = self.calculator.breakdown(tokens_saved as f64);

        SaveRecord {
            original_prompt: result.original_prompt.clone().unwrap_or_default(),
            optimized_prompt: result.optimized_prompt.clone().unwrap_or_default(),
            original_tokens: metrics.original_tokens_or_zero(),
            optimized_tokens: metrics.optimized_tokens_or_zero(),
            tokens_saved,
            money_saved: savings.money,
            energy_saved: savings.energy_kwh,
            emissions_saved: savings.emissions_kg,
            user_name: format!("API Test - {}", strategy.title()),
        }
    }

    /// Save an optimization outcome; failures are reported, never raised
    pub async fn persist(&mut self, result: &OptimizationResult, strategy: Strategy) {
        self.reporter.section("💾 Saving to database...");
        self.stats.saves_attempted += 1;

        let record = self.save_record_for(result, strategy);
        let energy_cost = self
            .calculator
            .energy_cost_savings(record.tokens_saved as f64);
        debug!("Save payload: {:?}", record);

        match self.client.save(&record).await {
            Ok(response) => {
                self.stats.saves_succeeded += 1;
                self.reporter.line("✅ Successfully saved to database!");
                self.reporter
                    .line(format!("   • Database ID: {}", response.id_or_na()));
                self.reporter.line(format!("   • User: {}", record.user_name));
                self.reporter.line(format!(
                    "   • Money saved: {}",
                    format_currency(record.money_saved)
                ));
                self.reporter.line(format!(
                    "   • Energy saved: {:.6} kWh",
                    record.energy_saved
                ));
                self.reporter.line(format!(
                    "   • Emissions saved: {:.6} kg CO2",
                    record.emissions_saved
                ));
                self.reporter
                    .line(format!("   • Energy cost saved: ${:.6}", energy_cost));
            }
            Err(ClientError::Api { status, body }) => {
                self.reporter.line(format!(
                    "❌ Failed to save to database: {}",
                    status.as_u16()
                ));
                let details = ClientError::Api { status, body }
                    .api_body_pretty()
                    .unwrap_or_default();
                self.reporter.line(format!("   Error: {}", details));
            }
            Err(e) => {
                warn!("Save request failed: {}", e);
                self.reporter.line(format!("❌ Database save failed: {}", e));
            }
        }
    }

    async fn optimize_and_persist(
        &mut self,
        prompt: &str,
        strategy: Strategy,
    ) -> Option<OptimizationResult> {
        let result = self.optimize(prompt, strategy).await?;
        if self.persist_results {
            self.persist(&result, strategy).await;
        }
        Some(result)
    }

    /// Optimize the same prompt once per strategy and compare the outcomes
    pub async fn run_strategy_sweep(
        &mut self,
        prompt: &str,
        strategies: &[Strategy],
    ) -> StrategySweep {
        self.reporter
            .section("🔄 Testing multiple strategies for the same prompt...");
        self.reporter
            .line(format!("📝 Prompt: {}", preview(prompt, PREVIEW_CHARS)));

        let mut sweep = StrategySweep::default();
        for &strategy in strategies {
            self.reporter
                .section(format!("--- Testing {} strategy ---", strategy));
            if let Some(result) = self.optimize_and_persist(prompt, strategy).await {
                sweep.push(strategy, result);
            }
        }

        if sweep.is_empty() {
            self.reporter
                .section("❌ No strategy produced a result; nothing to compare");
        } else {
            self.report_sweep(&sweep);
        }

        sweep
    }

    fn report_sweep(&mut self, sweep: &StrategySweep) {
        self.reporter.section("📊 STRATEGY COMPARISON:");
        self.reporter.rule(TABLE_WIDTH);
        self.reporter.line(format!(
            "{:<12} {:<12} {:<12} {:<12}",
            "Strategy", "Tokens Saved", "Reduction %", "Cost Saved"
        ));
        self.reporter.thin_rule(TABLE_WIDTH);

        for (strategy, result) in sweep.iter() {
            if let Some(metrics) = &result.metrics {
                self.reporter.line(format!(
                    "{:<12} {:<12} {:<12} ${:.6}",
                    strategy.as_str(),
                    metrics.tokens_saved_or_zero(),
                    metrics.reduction_percentage_or_zero(),
                    metrics.estimated_cost_savings_or_zero()
                ));
            }
        }

        self.reporter.section("🔍 DETAILED PROMPT COMPARISON:");
        self.reporter.rule(TABLE_WIDTH);
        for (strategy, result) in sweep.iter() {
            self.reporter.section(format!(
                "--- {} STRATEGY ---",
                strategy.as_str().to_uppercase()
            ));
            self.reporter.line(format!(
                "Original: {}",
                preview(result.original_prompt_or_na(), PREVIEW_CHARS)
            ));
            self.reporter
                .line(format!("Optimized: {}", result.optimized_prompt_or_na()));
            if let Some(metrics) = &result.metrics {
                self.reporter.line(format!(
                    "Savings: {} tokens ({}%)",
                    metrics.tokens_saved_or_zero(),
                    metrics.reduction_percentage_or_zero()
                ));
            }
        }
    }

    /// Probe the optional batch endpoint
    pub async fn check_batch_capability(&mut self) -> bool {
        self.reporter.section("🔄 Testing batch optimization...");

        match self.client.batch_info().await {
            Ok(info) => {
                self.reporter.line("✅ Batch endpoint is available");
                if let Some(max) = info.max_prompts {
                    self.reporter
                        .line(format!("   • Max prompts per batch: {}", max));
                }
                true
            }
            // A 200 is enough; the info body is only used for the limit line
            Err(ClientError::Parse(e)) => {
                debug!("Batch probe body not understood: {}", e);
                self.reporter.line("✅ Batch endpoint is available");
                true
            }
            Err(ClientError::Api { status, .. }) => {
                debug!("Batch probe returned {}", status);
                self.reporter
                    .line("❌ Batch endpoint not available or not implemented");
                false
            }
            Err(e) => {
                debug!("Batch probe failed: {}", e);
                self.reporter.line("❌ Batch endpoint not accessible");
                false
            }
        }
    }

    /// Submit all prompts as one concise batch
    pub async fn run_batch(&mut self, prompts: &[&str]) -> Option<BatchOptimizeResponse> {
        let items: Vec<(&str, Strategy)> =
            prompts.iter().map(|p| (*p, Strategy::Concise)).collect();
        let request = self.client.batch_request_for(&items);
        self.reporter.line(format!(
            "📦 Submitting batch of {} prompts...",
            request.prompts.len()
        ));

        let response = match self.client.optimize_batch(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Batch optimization failed: {}", e);
                self.reporter
                    .line(format!("❌ Batch optimization failed: {}", e));
                return None;
            }
        };

        self.reporter.line(format!(
            "✅ Batch {} processed: {} successful, {} failed",
            or_na(response.batch_id.as_deref()),
            or_na(response.successful),
            or_na(response.failed)
        ));
        for item in &response.results {
            if item.is_completed() {
                let tokens_saved = item
                    .metrics
                    .as_ref()
                    .map(|m| m.tokens_saved_or_zero())
                    .unwrap_or(0);
                self.reporter.line(format!(
                    "   • {}: {} tokens saved ({})",
                    or_na(item.id.as_deref()),
                    tokens_saved,
                    format_currency(self.calculator.money_saved(tokens_saved as f64))
                ));
            } else {
                self.reporter.line(format!(
                    "   • {}: failed ({})",
                    or_na(item.id.as_deref()),
                    or_na(item.error.as_deref())
                ));
            }
        }

        Some(response)
    }

    /// Run the complete sequence and print the final report
    ///
    /// The first prompt gets a single concise optimization, the second (or
    /// the first, when only one is given) goes through the strategy sweep, and
    /// all of them are offered to the batch endpoint.
    pub async fn run_all(&mut self, prompts: &[&str]) -> RunSummary {
        let started_at = Utc::now();
        self.reporter.line("🧪 XiaoPrompt Optimizer API Tester");
        self.reporter.line(format!("🌐 Target: {}", self.client.base_url()));
        match &self.client.config().target_language {
            Some(language) => self
                .reporter
                .line(format!("🌐 Translation: ENABLED (English → {})", language)),
            None => self.reporter.line("🌐 Translation: DISABLED"),
        }
        if self.persist_results {
            self.reporter
                .line("💾 Database: ENABLED (Results will be saved to dashboard)");
        } else {
            self.reporter.line("💾 Database: DISABLED");
        }
        self.reporter.rule(50);

        let api_reachable = self.check_health().await;
        if !api_reachable {
            self.reporter
                .section("❌ API is not accessible. Please make sure the server is running.");
            self.reporter.line("   Run: npm run dev or pnpm dev");
            self.reporter.flush();
            return self.summary(started_at, false, Vec::new(), None, false);
        }

        let mut sweep_strategies = Vec::new();
        let mut batch_available = None;

        match prompts.first() {
            Some(first) => {
                self.reporter
                    .section("🎯 Testing single prompt optimization...");
                if self
                    .optimize_and_persist(first, Strategy::Concise)
                    .await
                    .is_some()
                {
                    self.reporter
                        .section("✅ Single prompt test completed successfully!");
                }

                let sweep_prompt = prompts.get(1).unwrap_or(first);
                let sweep = self.run_strategy_sweep(sweep_prompt, &Strategy::ALL).await;
                sweep_strategies = sweep.strategies();

                let available = self.check_batch_capability().await;
                if available {
                    self.run_batch(prompts).await;
                }
                batch_available = Some(available);
            }
            None => {
                self.reporter.section("⚠️  No test prompts supplied");
            }
        }

        self.reporter.section("🎉 All tests completed!");
        self.reporter
            .line("💡 Tip: Check the server logs for detailed processing information");
        self.reporter.flush();

        self.summary(started_at, true, sweep_strategies, batch_available, true)
    }

    fn summary(
        &self,
        started_at: chrono::DateTime<Utc>,
        api_reachable: bool,
        sweep_strategies: Vec<Strategy>,
        batch_available: Option<bool>,
        completed: bool,
    ) -> RunSummary {
        RunSummary {
            base_url: self.client.base_url().to_string(),
            started_at,
            finished_at: Utc::now(),
            api_reachable,
            stats: self.stats,
            sweep_strategies,
            batch_available,
            completed,
        }
    }
}
