//! Pipeline orchestration.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rulemine_core::errors::{PipelineError, PipelineResult, ScanError};
use rulemine_core::events::types::{
    DomainsDiscoveredEvent, FileErrorEvent, FileExtractedEvent, RulesFusedEvent, ScanCompleteEvent,
    ScanStartedEvent,
};
use rulemine_core::events::RuleMineEventHandler;
use rulemine_core::traits::Cancellable;
use rulemine_core::RuleMineConfig;

use super::types::{AnalysisOutput, PipelineStats};
use crate::dependencies::{DependencyResolver, IncludeResolution};
use crate::domain::DomainDiscovery;
use crate::extraction::{Component, ComponentExtractor, ExtractionPatterns};
use crate::model::ProjectModelBuilder;
use crate::rules::{AnalyzerSet, Confidence, Rule, RuleVocabulary};
use crate::scanner::{LanguageReport, SourceFile, SourceWalker};

/// One slot per discovered file.
enum FileOutcome {
    Extracted(Component),
    Failed(ScanError),
    Cancelled,
}

pub struct AnalysisPipeline {
    config: RuleMineConfig,
    extractor: ComponentExtractor,
    vocabulary: RuleVocabulary,
    discovery: DomainDiscovery,
}

impl AnalysisPipeline {
    /// Compiles every pattern table up front.
    pub fn new(config: RuleMineConfig) -> Result<Self, PipelineError> {
        let extractor = ComponentExtractor::new(ExtractionPatterns::new()?);
        let vocabulary = RuleVocabulary::from_config(&config.analysis)?;
        let discovery = DomainDiscovery::new(&config.analysis)?;
        Ok(Self {
            config,
            extractor,
            vocabulary,
            discovery,
        })
    }

    pub fn config(&self) -> &RuleMineConfig {
        &self.config
    }

    /// Run every phase over `root`.
    ///
    /// Fatal: missing root, cancellation, worker pool failure, analyzer
    /// state errors. Per-file failures are collected in the result's
    /// `errors` and the file is left out of the model.
    pub fn run(
        &self,
        root: &Path,
        cancel: &dyn Cancellable,
        events: &dyn RuleMineEventHandler,
    ) -> Result<PipelineResult<AnalysisOutput>, PipelineError> {
        if !root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let threads = self.config.scan.effective_threads();
        if threads == 0 {
            return self.run_phases(root, cancel, events);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| PipelineError::WorkerPool(e.to_string()))?;
        pool.install(|| self.run_phases(root, cancel, events))
    }

    fn run_phases(
        &self,
        root: &Path,
        cancel: &dyn Cancellable,
        events: &dyn RuleMineEventHandler,
    ) -> Result<PipelineResult<AnalysisOutput>, PipelineError> {
        let mut result = PipelineResult::<AnalysisOutput>::default();
        let mut stats = PipelineStats::default();

        // Phase 1: Discovery
        events.on_scan_started(&ScanStartedEvent {
            root: root.to_path_buf(),
            file_count: None,
        });
        let started = Instant::now();
        let walk = SourceWalker::new(root, &self.config.scan)
            .walk(cancel)
            .map_err(|e| match e {
                ScanError::Cancelled => PipelineError::Cancelled,
                other => PipelineError::Scan(other),
            })?;
        stats.discovery_ms = started.elapsed().as_millis() as u64;
        stats.files_discovered = walk.files.len();
        tracing::info!(
            root = %root.display(),
            files = walk.files.len(),
            duration_ms = stats.discovery_ms,
            "source discovery complete"
        );

        for error in walk.errors {
            report_file_error(&error, events);
            stats.files_failed += 1;
            result.add_error(error.into());
        }
        let language = LanguageReport::from_counts(walk.extension_counts, walk.config_files);

        // Phase 2: Extraction, one slot per file
        let started = Instant::now();
        let outcomes: Vec<FileOutcome> = walk
            .files
            .par_iter()
            .map(|file| {
                if cancel.is_cancelled() {
                    return FileOutcome::Cancelled;
                }
                match read_source(file) {
                    Ok(text) => FileOutcome::Extracted(self.extractor.extract(&file.relative, &text)),
                    Err(e) => FileOutcome::Failed(e),
                }
            })
            .collect();

        let mut components = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                FileOutcome::Extracted(component) => {
                    events.on_file_extracted(&FileExtractedEvent {
                        path: component.path.clone(),
                        functions: component.functions.len(),
                        classes: component.classes.len(),
                    });
                    components.push(component);
                }
                FileOutcome::Failed(error) => {
                    report_file_error(&error, events);
                    stats.files_failed += 1;
                    result.add_error(error.into());
                }
                FileOutcome::Cancelled => return Err(PipelineError::Cancelled),
            }
        }
        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }
        stats.extraction_ms = started.elapsed().as_millis() as u64;
        events.on_scan_complete(&ScanCompleteEvent {
            files_discovered: stats.files_discovered,
            components: components.len(),
            failed_files: stats.files_failed,
            duration_ms: stats.extraction_ms,
        });

        // Phase 3: Include resolution
        let resolver = DependencyResolver::new(self.config.analysis.effective_ambiguous_includes());
        let reports = resolver.resolve(&mut components);
        for report in &reports {
            match report.resolution {
                IncludeResolution::Resolved(_) => stats.includes_resolved += 1,
                IncludeResolution::Ambiguous(_) => stats.includes_ambiguous += 1,
                IncludeResolution::Unresolved => {}
            }
        }

        // Phase 4: Project model
        let project = ProjectModelBuilder::new()
            .with_build_descriptors(walk.build_descriptors)
            .with_include_resolutions(reports)
            .with_language(language)
            .build(components);

        // Phase 5: Domain discovery over the whole component set
        let started = Instant::now();
        let domains = Arc::new(self.discovery.discover(&project.components));
        stats.domains_discovered = domains.len();
        events.on_domains_discovered(&DomainsDiscoveredEvent {
            domains: domains.names(),
        });
        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }

        // Phase 6: Per-component analysis and fusion
        let analyzers = AnalyzerSet::new(&self.vocabulary, Arc::clone(&domains));
        let per_component: Vec<Result<(usize, Vec<Rule>), PipelineError>> = project
            .components
            .par_iter()
            .map(|component| {
                if cancel.is_cancelled() {
                    return Err(PipelineError::Cancelled);
                }
                let candidates = analyzers.candidates(component)?;
                let count = candidates.len();
                Ok((count, crate::rules::merge(candidates)))
            })
            .collect();

        let mut rules = Vec::new();
        for (component, outcome) in project.components.iter().zip(per_component) {
            let (candidates, fused) = outcome?;
            stats.rule_candidates += candidates;
            events.on_rules_fused(&RulesFusedEvent {
                component: component.path.clone(),
                candidates,
                rules: fused.len(),
            });
            rules.extend(fused);
        }
        stats.rules_fused = rules.len();
        stats.rules_uncertain = rules.iter().filter(|r| r.confidence != Confidence::High).count();
        stats.analysis_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            components = project.metrics.total_components,
            functions = project.metrics.total_functions,
            domains = stats.domains_discovered,
            rules = stats.rules_fused,
            uncertain = stats.rules_uncertain,
            failed_files = stats.files_failed,
            "analysis complete"
        );

        drop(analyzers);
        let domains = Arc::try_unwrap(domains).unwrap_or_else(|shared| (*shared).clone());
        result.data = AnalysisOutput {
            project,
            domains,
            rules,
            stats,
        };
        Ok(result)
    }
}

fn read_source(file: &SourceFile) -> Result<String, ScanError> {
    let bytes = fs::read(&file.path).map_err(|source| ScanError::IoError {
        path: file.path.clone(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ScanError::UnsupportedEncoding {
        path: file.path.clone(),
        encoding: "non-UTF-8".to_string(),
    })
}

fn report_file_error(error: &ScanError, events: &dyn RuleMineEventHandler) {
    let path = match error {
        ScanError::IoError { path, .. }
        | ScanError::MaxFileSizeExceeded { path, .. }
        | ScanError::UnsupportedEncoding { path, .. }
        | ScanError::RootNotFound { path } => path.clone(),
        ScanError::Cancelled => return,
    };
    tracing::warn!(path = %path.display(), error = %error, "file skipped");
    events.on_file_error(&FileErrorEvent {
        path,
        message: error.to_string(),
    });
}
